//! Weight resolution: join shipment rows against the master table
//!
//! Non-numeric quantities and weights coerce to 0 instead of failing the
//! run; the operator reviews those through the unmatched/zero-weight
//! report rather than losing the whole calculation.

use pallet_types::{Error, Result, WeightUnit};

use crate::model::{MasterTable, ShipmentLine, Table};

/// Column names the resolver reads from a shipment table.
///
/// Always explicit: header guessing is a presentation-layer convenience
/// and happens before the engine is called.
#[derive(Debug, Clone)]
pub struct ShipmentColumns {
    pub key: String,
    pub quantity: String,
    pub display_name: String,
}

/// Outcome of weight resolution: lines in input order plus the keys that
/// had no master entry (deduplicated, first-seen order).
#[derive(Debug, Clone)]
pub struct ResolvedShipment {
    pub lines: Vec<ShipmentLine>,
    pub unmatched_keys: Vec<String>,
}

impl ResolvedShipment {
    pub fn unmatched_count(&self) -> usize {
        self.unmatched_keys.len()
    }
}

/// Build the master mapping from a raw master table.
///
/// Weights are coerced to float (non-numeric → 0), grams are converted to
/// kilograms, and duplicate keys keep the first row in input order. Rows
/// with a blank key are skipped (padding rows in spreadsheet exports).
pub fn build_master_table(
    table: &Table,
    key_column: &str,
    weight_column: &str,
    unit: WeightUnit,
) -> Result<MasterTable> {
    let key_idx = table
        .column_index(key_column)
        .ok_or_else(|| Error::MissingColumn(key_column.to_string()))?;
    let weight_idx = table
        .column_index(weight_column)
        .ok_or_else(|| Error::MissingColumn(weight_column.to_string()))?;

    let mut master = MasterTable::new();
    for row in &table.rows {
        let key = table.value(row, key_idx).trim();
        if key.is_empty() {
            continue;
        }
        let mut weight_kg = coerce_number(table.value(row, weight_idx));
        if unit == WeightUnit::Grams {
            weight_kg /= 1000.0;
        }
        master.insert_first(key.to_string(), weight_kg);
    }
    Ok(master)
}

/// Resolve shipping weights for every shipment row, preserving input order.
///
/// Order matters: the allocator packs lines exactly in this sequence.
pub fn resolve_weights(
    table: &Table,
    master: &MasterTable,
    columns: &ShipmentColumns,
) -> Result<ResolvedShipment> {
    let key_idx = table
        .column_index(&columns.key)
        .ok_or_else(|| Error::MissingColumn(columns.key.clone()))?;
    let quantity_idx = table
        .column_index(&columns.quantity)
        .ok_or_else(|| Error::MissingColumn(columns.quantity.clone()))?;
    let name_idx = table
        .column_index(&columns.display_name)
        .ok_or_else(|| Error::MissingColumn(columns.display_name.clone()))?;

    let mut lines = Vec::with_capacity(table.len());
    let mut unmatched_keys: Vec<String> = Vec::new();

    for row in &table.rows {
        let key = table.value(row, key_idx).trim().to_string();
        let display_name = table.value(row, name_idx).trim().to_string();
        let quantity = coerce_number(table.value(row, quantity_idx));

        let unit_weight_kg = master.unit_weight_kg(&key);
        let total_weight_kg = unit_weight_kg.map(|w| quantity * w).unwrap_or(0.0);

        if unit_weight_kg.is_none() && !unmatched_keys.contains(&key) {
            unmatched_keys.push(key.clone());
        }

        lines.push(ShipmentLine {
            key,
            display_name,
            quantity,
            unit_weight_kg,
            total_weight_kg,
        });
    }

    Ok(ResolvedShipment {
        lines,
        unmatched_keys,
    })
}

/// Lenient numeric coercion: trims, strips thousands separators, and falls
/// back to 0.0 for anything unparseable or missing.
fn coerce_number(raw: &str) -> f64 {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return 0.0;
    }
    cleaned.parse().unwrap_or(0.0)
}
