use std::path::PathBuf;

/// Extension of Flipper Zero NFC dump files
pub const OUTPUT_EXTENSION: &str = "nfc";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const VERBOSE_LOG_FILTER: &str = "debug";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Proxmark3 JSON dump to read.
    pub input: PathBuf,
    /// Destination `.nfc` file, already resolved against the input path.
    pub output: PathBuf,
    /// Emit debug diagnostics.
    pub verbose: bool,
}

impl Config {
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}
