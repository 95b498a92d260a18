//! CSV table loading with UTF-8 / Shift_JIS detection
//!
//! Operators upload CSV exports from Japanese office environments, which
//! arrive either as UTF-8 (often with a BOM) or as Shift_JIS.

use std::path::Path;

use pallet_types::{Error, Result};

use pallet_domain::model::Table;

/// Load a tabular dataset from a CSV file. The first record is treated as
/// the header row. A load failure reports the offending file and leaves
/// any previously registered data untouched.
pub fn load_table_from_csv(path: &Path) -> Result<Table> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::InputFormat(format!("{}: {}", path.display(), e)))?;
    let content = decode_bytes(&bytes);
    parse_csv(&content).map_err(|e| Error::InputFormat(format!("{}: {}", path.display(), e)))
}

/// Decode as UTF-8 when valid, otherwise fall back to Shift_JIS
fn decode_bytes(bytes: &[u8]) -> String {
    let bytes = strip_bom(bytes);
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (decoded, _, _) = encoding_rs::SHIFT_JIS.decode(bytes);
            decoded.into_owned()
        }
    }
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes)
}

fn parse_csv(content: &str) -> std::result::Result<Table, String> {
    if content.trim().is_empty() {
        return Err("CSV file is empty".to_string());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| e.to_string())?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| e.to_string())?;
        if record.iter().all(|v| v.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(|v| v.to_string()).collect());
    }

    Ok(Table::new(headers, rows))
}
