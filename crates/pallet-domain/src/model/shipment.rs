//! Resolved shipment line

use serde::{Deserialize, Serialize};

/// One shipment row after weight resolution.
///
/// Created fresh per calculation run and never mutated. `unit_weight_kg`
/// is `None` when the key had no master entry, in which case the total
/// weight is 0 and the key appears in the unmatched report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentLine {
    /// Join key into the master table
    pub key: String,
    /// 品名 shown in result tables
    pub display_name: String,
    /// 数量, coerced from input (non-numeric → 0)
    pub quantity: f64,
    /// 単重(kg) from the master, absent when unmatched
    pub unit_weight_kg: Option<f64>,
    /// 数量 × 単重(kg), 0 when unmatched
    pub total_weight_kg: f64,
}

impl ShipmentLine {
    pub fn is_matched(&self) -> bool {
        self.unit_weight_kg.is_some()
    }
}
