use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::Config;
use crate::mifare::build_output_path;

#[derive(Parser, Debug)]
#[command(
    name = "pm3-flipper",
    about = "Convert a Proxmark3 Mifare Classic JSON dump into a Flipper Zero .nfc file",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path to the Proxmark3 JSON dump.
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Output .nfc file or directory; defaults to the input path with a .nfc extension.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print debug diagnostics (RUST_LOG takes precedence).
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_config(&self) -> Config {
        Config {
            input: self.input.clone(),
            output: build_output_path(&self.input, self.output.as_deref()),
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["pm3-flipper"];
        argv.extend(args);
        Cli::try_parse_from(&argv)
            .expect("parse arguments")
            .to_config()
    }

    #[test]
    fn input_and_output_map_into_config() {
        let cfg = parse(&["-i", "dump.json", "-o", "/tmp/flipper/card.nfc"]);
        assert_eq!(cfg.input, PathBuf::from("dump.json"));
        assert_eq!(cfg.output, PathBuf::from("/tmp/flipper/card.nfc"));
        assert!(!cfg.verbose);
        assert_eq!(cfg.log_filter(), "info");
    }

    #[test]
    fn long_flags_are_accepted() {
        let cfg = parse(&["--input", "a.json", "--output", "b.nfc", "--verbose"]);
        assert_eq!(cfg.input, PathBuf::from("a.json"));
        assert_eq!(cfg.output, PathBuf::from("b.nfc"));
        assert!(cfg.verbose);
        assert_eq!(cfg.log_filter(), "debug");
    }

    #[test]
    fn output_defaults_next_to_input() {
        let cfg = parse(&["-i", "dumps/hf-mf-01020304-dump.json"]);
        assert_eq!(cfg.output, PathBuf::from("dumps/hf-mf-01020304-dump.nfc"));
    }

    #[test]
    fn output_directory_gets_default_name() {
        let temp = TempDir::new().expect("temp dir");
        let out_dir = temp.path().to_string_lossy().into_owned();
        let cfg = parse(&["-i", "card.json", "-o", &out_dir]);
        assert_eq!(cfg.output, temp.path().join("card.nfc"));
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["pm3-flipper", "-o", "out.nfc"]).is_err());
    }
}
