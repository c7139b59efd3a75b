//! `.nfc` file output

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::OUTPUT_EXTENSION;
use crate::error::{ConvertError, Result};

/// Build the output path for a converted dump
///
/// # Arguments
/// * `input` - Path of the Proxmark3 JSON dump
/// * `output` - Optional user-supplied destination
///
/// # Returns
/// - `{input without extension}.nfc` when no destination is given
/// - `{output}/{input stem}.nfc` when the destination is an existing directory
/// - `output` unchanged otherwise
pub fn build_output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        None => input.with_extension(OUTPUT_EXTENSION),
        Some(dir) if dir.is_dir() => {
            let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
            name.push(".");
            name.push(OUTPUT_EXTENSION);
            dir.join(name)
        }
        Some(path) => path.to_path_buf(),
    }
}

/// Write rendered `.nfc` text to `path`
///
/// # Notes
/// - Creates parent directories if needed
/// - Overwrites an existing file
/// - Content goes to a temporary file next to `path` that is renamed into
///   place only after a complete write, so a failed write leaves no partial file
pub fn write_nfc(path: &Path, contents: &str) -> Result<()> {
    let io_err = |err| ConvertError::from_io_error(path, err);

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(io_err)?;

    let mut file = NamedTempFile::new_in(parent).map_err(io_err)?;
    file.write_all(contents.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)?;
    file.persist(path).map_err(|err| io_err(err.error))?;
    Ok(())
}
