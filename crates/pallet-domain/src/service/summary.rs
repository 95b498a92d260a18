//! Per-pallet weight aggregation

use std::collections::BTreeMap;

use crate::model::{PalletAssignment, PalletSummary, ShipmentLine};

/// Sum weights per genuine pallet number, ascending. Overflow-tagged lines
/// are excluded. The `over_capacity` flag is diagnostic only: with a
/// correct allocator it never fires, but it is checked anyway.
pub fn summarize(
    lines: &[ShipmentLine],
    assignments: &[PalletAssignment],
    capacity_kg: f64,
) -> Vec<PalletSummary> {
    let mut totals: BTreeMap<u32, f64> = BTreeMap::new();
    for (line, assignment) in lines.iter().zip(assignments) {
        if let Some(no) = assignment.pallet_no() {
            *totals.entry(no).or_insert(0.0) += line.total_weight_kg;
        }
    }

    totals
        .into_iter()
        .map(|(pallet_no, total_weight_kg)| PalletSummary {
            pallet_no,
            total_weight_kg,
            over_capacity: total_weight_kg > capacity_kg,
        })
        .collect()
}

/// Grand total across all summarized pallets
pub fn grand_total(summaries: &[PalletSummary]) -> f64 {
    summaries.iter().map(|s| s.total_weight_kg).sum()
}

/// Plain pallet → weight mapping for the template-fill collaborator, which
/// needs no knowledge of allocation internals.
pub fn summary_map(summaries: &[PalletSummary]) -> BTreeMap<u32, f64> {
    summaries
        .iter()
        .map(|s| (s.pallet_no, s.total_weight_kg))
        .collect()
}
