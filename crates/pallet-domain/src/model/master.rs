//! Master table: product/part key to per-unit weight

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single normalized master row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterRecord {
    /// 品名 or 図番, depending on the configured key mode
    pub key: String,
    /// 単重(kg)
    pub unit_weight_kg: f64,
}

/// Deduplicated key → per-unit weight mapping, weights in kilograms.
///
/// Built once per uploaded master file and immutable afterwards; the first
/// occurrence of a duplicate key wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MasterTable {
    records: HashMap<String, f64>,
}

impl MasterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless the key is already present.
    /// Returns false when the duplicate was ignored.
    pub fn insert_first(&mut self, key: String, unit_weight_kg: f64) -> bool {
        if self.records.contains_key(&key) {
            return false;
        }
        self.records.insert(key, unit_weight_kg);
        true
    }

    pub fn unit_weight_kg(&self, key: &str) -> Option<f64> {
        self.records.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
