//! Header guessing heuristics
//!
//! Fuzzy substring matching on header names is a convenience for operators
//! whose uploads name columns inconsistently (品名 / 製品名 / 部品名称).
//! It stays out of the engine: callers resolve headers here first, and the
//! engine only ever receives explicit column names.

use pallet_types::KeyMode;

/// First header containing any candidate substring, case-insensitive
pub fn guess_column<'a>(headers: &'a [String], candidates: &[&str]) -> Option<&'a str> {
    for candidate in candidates {
        let candidate = candidate.to_lowercase();
        if let Some(header) = headers
            .iter()
            .find(|h| h.to_lowercase().contains(&candidate))
        {
            return Some(header.as_str());
        }
    }
    None
}

/// Join-key column of a shipment or master table for the given key mode
pub fn guess_key_column<'a>(headers: &'a [String], key_mode: KeyMode) -> Option<&'a str> {
    match key_mode {
        KeyMode::Name => guess_column(headers, &["品名", "名称", "name"]),
        KeyMode::PartNumber => guess_column(headers, &["図番", "品番", "part", "drawing"]),
    }
}

pub fn guess_quantity_column(headers: &[String]) -> Option<&str> {
    guess_column(headers, &["数量", "qty", "quantity"])
}

pub fn guess_weight_column(headers: &[String]) -> Option<&str> {
    guess_column(headers, &["単重", "重量", "weight"])
}

pub fn guess_display_name_column(headers: &[String]) -> Option<&str> {
    guess_column(headers, &["品名", "名称", "name"])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_guess_by_substring() {
        let h = headers(&["製品名称", "出荷数量", "備考"]);
        assert_eq!(guess_key_column(&h, KeyMode::Name), Some("製品名称"));
        assert_eq!(guess_quantity_column(&h), Some("出荷数量"));
        assert_eq!(guess_weight_column(&h), None);
    }

    #[test]
    fn test_guess_part_number_mode() {
        let h = headers(&["図番", "品名", "数量"]);
        assert_eq!(guess_key_column(&h, KeyMode::PartNumber), Some("図番"));
        assert_eq!(guess_key_column(&h, KeyMode::Name), Some("品名"));
    }

    #[test]
    fn test_guess_case_insensitive_english() {
        let h = headers(&["Part Number", "Qty", "Unit Weight"]);
        assert_eq!(guess_key_column(&h, KeyMode::PartNumber), Some("Part Number"));
        assert_eq!(guess_quantity_column(&h), Some("Qty"));
        assert_eq!(guess_weight_column(&h), Some("Unit Weight"));
    }

    #[test]
    fn test_candidate_priority_order() {
        // 品名 is preferred over 名称 when both exist
        let h = headers(&["名称", "品名"]);
        assert_eq!(guess_display_name_column(&h), Some("品名"));
    }
}
