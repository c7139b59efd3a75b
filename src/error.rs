//! Error types for dump conversion
//!
//! `FormatError` covers everything wrong with the dump itself, while
//! `ConvertError` adds the filesystem side so callers can tell a bad dump
//! apart from an unreadable file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems with the contents of a Proxmark3 JSON dump
#[derive(Debug, Error)]
pub enum FormatError {
    /// Input is not syntactically valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// `Created` is missing or is not `proxmark3`
    #[error("Dump must have 'Created' set to 'proxmark3'")]
    WrongSource,

    /// `FileType` is missing or does not look like a Mifare dump
    #[error("'FileType' does not look like a Mifare dump (mf*)")]
    WrongCardType,

    /// A key of the `blocks` object is not a block number
    #[error("Invalid block index '{0}'")]
    InvalidIndex(String),

    /// A hex field has odd length or non-hex characters
    #[error("Invalid hex string in {field}: '{value}'")]
    InvalidHex { field: String, value: String },

    /// A field holds a JSON value of the wrong kind
    #[error("Field '{field}' must be {expected}")]
    UnexpectedType {
        field: String,
        expected: &'static str,
    },
}

/// Errors raised while converting a dump file into an `.nfc` file
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The dump content was rejected
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Reading the input or writing the output failed
    #[error("File I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

impl FormatError {
    pub(crate) fn invalid_hex(field: impl Into<String>, value: impl Into<String>) -> Self {
        FormatError::InvalidHex {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl ConvertError {
    pub fn from_io_error(path: impl Into<PathBuf>, error: io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source: error,
        }
    }

    /// Check if the dump itself was rejected (as opposed to an I/O failure)
    pub fn is_format_error(&self) -> bool {
        matches!(self, ConvertError::Format(_))
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ConvertError::Format(FormatError::WrongSource) => {
                "This is not a Proxmark3 dump ('Created' must be 'proxmark3').".to_string()
            }
            ConvertError::Format(FormatError::WrongCardType) => {
                "Only Mifare Classic dumps are supported ('FileType' must start with 'mf')."
                    .to_string()
            }
            ConvertError::Io { path, source } if source.kind() == io::ErrorKind::NotFound => {
                format!("File '{}' does not exist.", path.display())
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormatError::invalid_hex("UID", "ZZ");
        assert_eq!(err.to_string(), "Invalid hex string in UID: 'ZZ'");

        let err = FormatError::InvalidIndex("abc".to_string());
        assert_eq!(err.to_string(), "Invalid block index 'abc'");
    }

    #[test]
    fn test_format_error_is_transparent() {
        let err = ConvertError::from(FormatError::WrongCardType);
        assert_eq!(err.to_string(), FormatError::WrongCardType.to_string());
        assert!(err.is_format_error());
    }

    #[test]
    fn test_io_error_is_distinct() {
        let err = ConvertError::from_io_error(
            "/tmp/missing.json",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(!err.is_format_error());
        assert!(err.to_string().contains("/tmp/missing.json"));
    }

    #[test]
    fn test_user_message() {
        let err = ConvertError::from(FormatError::WrongSource);
        assert!(err.user_message().contains("proxmark3"));

        let err = ConvertError::from_io_error(
            "dump.json",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.user_message(), "File 'dump.json' does not exist.");

        let err = ConvertError::from_io_error(
            "out.nfc",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.user_message().contains("denied"));
    }
}
