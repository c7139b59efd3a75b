//! Mifare Classic capacity detection

use std::fmt;

/// Declared card capacity, derived from the number of blocks in a dump
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityTier {
    /// Non-standard block count (partial or unusual dump)
    Unknown,
    /// 64 blocks
    OneK,
    /// 128 blocks
    TwoK,
    /// 256 blocks
    FourK,
}

impl CapacityTier {
    /// Returns the label written to the `Mifare Classic type` line
    pub fn as_str(&self) -> &'static str {
        match self {
            CapacityTier::Unknown => "0K",
            CapacityTier::OneK => "1K",
            CapacityTier::TwoK => "2K",
            CapacityTier::FourK => "4K",
        }
    }

    pub fn is_standard(&self) -> bool {
        !matches!(self, CapacityTier::Unknown)
    }
}

impl fmt::Display for CapacityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a block count onto a capacity tier
///
/// Anything other than 64, 128 or 256 blocks is `Unknown` rather than an error.
pub fn classify(block_count: usize) -> CapacityTier {
    match block_count {
        64 => CapacityTier::OneK,
        128 => CapacityTier::TwoK,
        256 => CapacityTier::FourK,
        _ => CapacityTier::Unknown,
    }
}
