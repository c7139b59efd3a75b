//! Mifare Classic dump handling
//!
//! This module provides the conversion pipeline for card dumps:
//! - Proxmark3 JSON parsing and validation
//! - Hex encoding/decoding of card fields
//! - Card capacity detection
//! - Flipper Zero `.nfc` rendering and file output

mod capacity;
mod codec;
mod output;
mod reader;
mod writer;

pub use capacity::{classify, CapacityTier};
pub use codec::{decode_hex, encode_hex};
pub use output::{build_output_path, write_nfc};
pub use reader::read_dump;
pub use writer::render;

use crate::error::FormatError;

/// Size of a single Mifare Classic block in bytes
pub const BLOCK_SIZE: usize = 16;

/// Card identity and memory contents read from a dump
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardRecord {
    pub uid: Vec<u8>,
    pub atqa: Vec<u8>,
    pub sak: Vec<u8>,
    /// Blocks in ascending block-number order; gaps in the source are not filled.
    pub blocks: Vec<Vec<u8>>,
}

impl CardRecord {
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn tier(&self) -> CapacityTier {
        classify(self.block_count())
    }

    /// Positions of blocks that are not exactly `BLOCK_SIZE` bytes long
    pub fn irregular_blocks(&self) -> Vec<usize> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| block.len() != BLOCK_SIZE)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Convert Proxmark3 JSON text into Flipper Zero `.nfc` text
pub fn convert(json_text: &str) -> Result<String, FormatError> {
    let card = read_dump(json_text)?;
    Ok(render(&card, card.tier()))
}
