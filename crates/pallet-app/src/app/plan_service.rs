//! Plan service - the calculation use case
//!
//! Orchestrates the engine stages for one calculation run:
//! 1. Resolve shipping weights against the registered master table
//! 2. Allocate lines to pallets under the capacity cap
//! 3. Aggregate per-pallet totals and the grand total
//!
//! The service is stateless; session ownership of the master table and the
//! last result lives in the shell (see `session`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use pallet_domain::model::{MasterTable, PalletAssignment, PalletSummary, Table};
use pallet_domain::service::{allocate, grand_total, resolve_weights, summarize, ShipmentColumns};
use pallet_types::Result;

/// One output row of a plan, in original shipment order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanLine {
    pub assignment: PalletAssignment,
    pub display_name: String,
    pub quantity: f64,
    pub unit_weight_kg: Option<f64>,
    pub total_weight_kg: f64,
}

/// Complete result of one calculation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResult {
    pub lines: Vec<PlanLine>,
    pub summaries: Vec<PalletSummary>,
    pub grand_total_kg: f64,
    /// Keys with no master entry, for operator review
    pub unmatched_keys: Vec<String>,
    pub capacity_kg: f64,
}

impl PlanResult {
    /// Plain pallet → weight mapping for the template fill
    pub fn summary_map(&self) -> BTreeMap<u32, f64> {
        self.summaries
            .iter()
            .map(|s| (s.pallet_no, s.total_weight_kg))
            .collect()
    }

    pub fn overflow_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| l.assignment.is_overflow())
            .count()
    }

    pub fn pallet_count(&self) -> usize {
        self.summaries.len()
    }
}

/// Run one calculation: shipment table + registered master → plan result.
///
/// Fails before touching anything on a non-positive capacity or a missing
/// column, so an earlier successful result is never clobbered by a bad run.
pub fn run_plan(
    shipment: &Table,
    master: &MasterTable,
    columns: &ShipmentColumns,
    capacity_kg: f64,
) -> Result<PlanResult> {
    let resolved = resolve_weights(shipment, master, columns)?;
    let assignments = allocate(&resolved.lines, capacity_kg)?;
    let summaries = summarize(&resolved.lines, &assignments, capacity_kg);
    let grand_total_kg = grand_total(&summaries);

    let lines = resolved
        .lines
        .into_iter()
        .zip(assignments)
        .map(|(line, assignment)| PlanLine {
            assignment,
            display_name: line.display_name,
            quantity: line.quantity,
            unit_weight_kg: line.unit_weight_kg,
            total_weight_kg: line.total_weight_kg,
        })
        .collect();

    Ok(PlanResult {
        lines,
        summaries,
        grand_total_kg,
        unmatched_keys: resolved.unmatched_keys,
        capacity_kg,
    })
}
