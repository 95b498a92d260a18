//! Pallet assignment and summary types

use serde::{Deserialize, Serialize};

/// Assignment of a single shipment line, in input order.
///
/// A line whose individual weight exceeds capacity can never be packed and
/// is tagged `Overflow` with the pallet number that was current at that
/// moment, rather than mixing a marker string into the numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "pallet", rename_all = "lowercase")]
pub enum PalletAssignment {
    Assigned(u32),
    Overflow(u32),
}

impl PalletAssignment {
    /// Genuine pallet number, `None` for overflow lines
    pub fn pallet_no(&self) -> Option<u32> {
        match self {
            PalletAssignment::Assigned(no) => Some(*no),
            PalletAssignment::Overflow(_) => None,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, PalletAssignment::Overflow(_))
    }

    /// Label for result tables: the pallet number, or 超過 for overflow
    pub fn label(&self) -> String {
        match self {
            PalletAssignment::Assigned(no) => no.to_string(),
            PalletAssignment::Overflow(no) => format!("超過({})", no),
        }
    }
}

impl std::fmt::Display for PalletAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Aggregated weight for one pallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PalletSummary {
    pub pallet_no: u32,
    pub total_weight_kg: f64,
    /// Diagnostic only: a correct allocator never produces this
    pub over_capacity: bool,
}
