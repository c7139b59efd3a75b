//! Hex conversion for card fields

use crate::error::FormatError;

/// Decode an even-length hex string into bytes
///
/// Both letter cases are accepted. An empty string decodes to an empty vector.
/// Errors name the field `input`; the dump reader substitutes the real field.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, FormatError> {
    hex::decode(s).map_err(|_| FormatError::invalid_hex("input", s))
}

/// Render bytes as uppercase hex pairs separated by single spaces
pub fn encode_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mixed_case() {
        assert_eq!(decode_hex("0aFf").unwrap(), vec![0x0A, 0xFF]);
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_hex("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_odd_length() {
        let err = decode_hex("ABC").unwrap_err();
        assert!(matches!(err, FormatError::InvalidHex { value, .. } if value == "ABC"));
    }

    #[test]
    fn test_decode_non_hex() {
        assert!(decode_hex("ZZ").is_err());
        assert!(decode_hex("0x12").is_err());
        assert!(decode_hex("12 34").is_err());
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode_hex(&[0x04, 0xab, 0x00]), "04 AB 00");
        assert_eq!(encode_hex(&[]), "");
    }

    #[test]
    fn test_round_trip_normalizes_case() {
        for s in ["", "00", "deadBEEF", "0123456789abcdef"] {
            let bytes = decode_hex(s).unwrap();
            assert_eq!(encode_hex(&bytes).replace(' ', ""), s.to_uppercase());
        }

        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(decode_hex(&encode_hex(&bytes).replace(' ', "")).unwrap(), bytes);
    }
}
