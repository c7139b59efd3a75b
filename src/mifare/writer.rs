//! Flipper Zero `.nfc` rendering

use super::capacity::CapacityTier;
use super::codec::encode_hex;
use super::CardRecord;

const FILE_TYPE: &str = "Flipper NFC device";
const FORMAT_VERSION: u32 = 2;
const DEVICE_TYPE: &str = "Mifare Classic";
const DATA_FORMAT_VERSION: u32 = 2;

/// Render a card as a Flipper Zero Mifare Classic dump
///
/// Block lines are numbered by their position in `card.blocks`, not by the
/// block numbers of the source dump. The text always ends with a newline.
pub fn render(card: &CardRecord, tier: CapacityTier) -> String {
    let mut lines = vec![
        format!("Filetype: {FILE_TYPE}"),
        format!("Version: {FORMAT_VERSION}"),
        "# Nfc device type can be UID, Mifare Ultralight, Mifare Classic, Bank card".to_string(),
        format!("Device type: {DEVICE_TYPE}"),
        "# UID, ATQA and SAK are common for all formats".to_string(),
        format!("UID: {}", encode_hex(&card.uid)),
        format!("ATQA: {}", encode_hex(&card.atqa)),
        format!("SAK: {}", encode_hex(&card.sak)),
        "# Mifare Classic specific data".to_string(),
        format!("Mifare Classic type: {tier}"),
        format!("Data format version: {DATA_FORMAT_VERSION}"),
        "# Mifare Classic blocks, '??' means unknown data".to_string(),
    ];
    lines.extend(
        card.blocks
            .iter()
            .enumerate()
            .map(|(i, block)| format!("Block {i}: {}", encode_hex(block))),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
