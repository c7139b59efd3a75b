use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::Config;
use crate::error::{ConvertError, Result};
use crate::mifare::{read_dump, render, write_nfc, CapacityTier, BLOCK_SIZE};

/// Outcome of a successful conversion
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub tier: CapacityTier,
    pub block_count: usize,
}

/// Convert the dump at `cfg.input` and write it to `cfg.output`
///
/// The whole file is rendered in memory first; nothing is written unless
/// parsing and rendering both succeed.
pub fn run_conversion(cfg: &Config) -> Result<ConversionReport> {
    let input = absolute_path(&cfg.input);
    let output = absolute_path(&cfg.output);
    println!("[*]  Reading {}", input.display());

    let json_text = fs::read_to_string(&cfg.input)
        .map_err(|err| ConvertError::from_io_error(&cfg.input, err))?;
    debug!("read {} bytes from {}", json_text.len(), cfg.input.display());

    let card = read_dump(&json_text)?;
    let tier = card.tier();
    if !tier.is_standard() {
        warn!(
            "{} blocks is not a standard Mifare Classic size; writing type {tier}",
            card.block_count()
        );
    }
    let irregular = card.irregular_blocks();
    if !irregular.is_empty() {
        warn!("blocks {irregular:?} are not {BLOCK_SIZE} bytes long; writing them as-is");
    }

    let contents = render(&card, tier);
    write_nfc(&cfg.output, &contents)?;

    println!(
        "[+]  nfc dump into {} (Mifare Classic {tier}, {} blocks)",
        output.display(),
        card.block_count()
    );

    Ok(ConversionReport {
        input,
        output,
        tier,
        block_count: card.block_count(),
    })
}

/// Absolute form of `path` for reporting; falls back to `path` itself
fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
