pub mod cli;
pub mod config;
pub mod error;
pub mod mifare;
pub mod workflow;

pub use config::Config;
pub use error::{ConvertError, FormatError};
pub use mifare::{convert, CardRecord};
pub use workflow::{run_conversion, ConversionReport};
