//! Proxmark3 JSON dump parsing

use log::debug;
use serde_json::{Map, Value};

use super::codec::decode_hex;
use super::CardRecord;
use crate::error::FormatError;

/// Value of `Created` written by the Proxmark3 client
const PROXMARK3_CREATOR: &str = "proxmark3";

/// Lower-case `FileType` prefix shared by Mifare dumps (`mfcard`, `mfc v2`, ...)
const MIFARE_FILE_TYPE_PREFIX: &str = "mf";

type JsonObject = Map<String, Value>;

/// Parse and validate a Proxmark3 Mifare JSON dump
///
/// # Errors
/// - `InvalidJson` if the text is not JSON
/// - `WrongSource` unless `Created` is exactly `proxmark3`
/// - `WrongCardType` unless `FileType` starts with `mf` (any case)
/// - `InvalidIndex` for a `blocks` key that is not a block number
/// - `InvalidHex` for any malformed hex value
/// - `UnexpectedType` when an object or string field has another JSON type
///
/// # Notes
/// - `Card`, `blocks` and the `UID`/`ATQA`/`SAK` strings default to empty
/// - Blocks are ordered by numeric key; missing block numbers are skipped
pub fn read_dump(json_text: &str) -> Result<CardRecord, FormatError> {
    let data: Value = serde_json::from_str(json_text)?;
    let root = data.as_object().ok_or_else(|| unexpected("<root>", "an object"))?;

    if root.get("Created").and_then(Value::as_str) != Some(PROXMARK3_CREATOR) {
        return Err(FormatError::WrongSource);
    }

    let file_type = root
        .get("FileType")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_lowercase();
    if !file_type.starts_with(MIFARE_FILE_TYPE_PREFIX) {
        return Err(FormatError::WrongCardType);
    }

    let empty = JsonObject::new();
    let card = object_field(root, "Card")?.unwrap_or(&empty);
    let uid = hex_field(card, "UID")?;
    let atqa = hex_field(card, "ATQA")?;
    let sak = hex_field(card, "SAK")?;

    let blocks = read_blocks(object_field(root, "blocks")?.unwrap_or(&empty))?;
    debug!(
        "parsed {file_type} dump: uid={} blocks={}",
        hex::encode_upper(&uid),
        blocks.len()
    );

    Ok(CardRecord {
        uid,
        atqa,
        sak,
        blocks,
    })
}

fn read_blocks(blocks: &JsonObject) -> Result<Vec<Vec<u8>>, FormatError> {
    // Every key is validated before any value is decoded.
    let mut indexed = blocks
        .iter()
        .map(|(key, value)| Ok((parse_index(key)?, key, value)))
        .collect::<Result<Vec<_>, FormatError>>()?;

    // Numeric order: "10" must come after "9". Equal numbers keep document order.
    indexed.sort_by(|(a, _, _), (b, _, _)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    indexed
        .into_iter()
        .map(|(_, key, value)| decode_value(&format!("block {key}"), value))
        .collect()
}

/// Normalize a block key to its decimal digits without leading zeros
///
/// Keys of any length are accepted, so comparing `(len, digits)` of the
/// result gives numeric order.
fn parse_index(key: &str) -> Result<&str, FormatError> {
    let trimmed = key.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::InvalidIndex(key.to_string()));
    }
    let significant = digits.trim_start_matches('0');
    Ok(if significant.is_empty() { "0" } else { significant })
}

fn object_field<'a>(
    obj: &'a JsonObject,
    name: &str,
) -> Result<Option<&'a JsonObject>, FormatError> {
    match obj.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(inner)) => Ok(Some(inner)),
        Some(_) => Err(unexpected(name, "an object")),
    }
}

fn hex_field(obj: &JsonObject, name: &str) -> Result<Vec<u8>, FormatError> {
    match obj.get(name) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => decode_value(name, value),
    }
}

fn decode_value(field: &str, value: &Value) -> Result<Vec<u8>, FormatError> {
    let text = value
        .as_str()
        .ok_or_else(|| unexpected(field, "a hex string"))?;
    decode_hex(text).map_err(|_| FormatError::invalid_hex(field, text))
}

fn unexpected(field: &str, expected: &'static str) -> FormatError {
    FormatError::UnexpectedType {
        field: field.to_string(),
        expected,
    }
}
