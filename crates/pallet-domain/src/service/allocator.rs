//! Pallet allocation: ordered single-pass first-fit
//!
//! Each line is packed into the currently open pallet when it fits, else a
//! new pallet is opened. No reordering, no optimization; a few thousand
//! rows finish in one bounded synchronous pass.

use pallet_types::{Error, Result};

use crate::model::{PalletAssignment, ShipmentLine};

/// Assign every line, in input order, to a pallet under `capacity_kg`.
///
/// Equality packs into the current pallet (inclusive upper bound), so a
/// zero-weight line (unmatched master key) always fits. A line that alone
/// exceeds capacity is tagged `Overflow` against the pallet current at
/// that moment; the open pallet's load and number are left untouched and
/// the next line is evaluated as if the oversized line never existed.
pub fn allocate(lines: &[ShipmentLine], capacity_kg: f64) -> Result<Vec<PalletAssignment>> {
    if capacity_kg <= 0.0 {
        return Err(Error::InvalidCapacity(capacity_kg));
    }

    let mut assignments = Vec::with_capacity(lines.len());
    let mut current_pallet: u32 = 1;
    let mut current_load = 0.0;

    for line in lines {
        let w = line.total_weight_kg;
        if w > capacity_kg {
            assignments.push(PalletAssignment::Overflow(current_pallet));
            continue;
        }
        if current_load + w <= capacity_kg {
            assignments.push(PalletAssignment::Assigned(current_pallet));
            current_load += w;
        } else {
            current_pallet += 1;
            assignments.push(PalletAssignment::Assigned(current_pallet));
            current_load = w;
        }
    }

    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(weight_kg: f64) -> ShipmentLine {
        ShipmentLine {
            key: "K".to_string(),
            display_name: "部品".to_string(),
            quantity: 1.0,
            unit_weight_kg: Some(weight_kg),
            total_weight_kg: weight_kg,
        }
    }

    fn lines(weights: &[f64]) -> Vec<ShipmentLine> {
        weights.iter().copied().map(line).collect()
    }

    #[test]
    fn test_first_fit_opens_new_pallet() {
        // capacity 500: 300+150 fits pallet 1, 100 would make 550 so it
        // opens pallet 2
        let assignments = allocate(&lines(&[300.0, 150.0, 100.0]), 500.0).unwrap();
        assert_eq!(
            assignments,
            vec![
                PalletAssignment::Assigned(1),
                PalletAssignment::Assigned(1),
                PalletAssignment::Assigned(2),
            ]
        );
    }

    #[test]
    fn test_equality_packs_into_current_pallet() {
        let assignments = allocate(&lines(&[300.0, 200.0, 1.0]), 500.0).unwrap();
        assert_eq!(
            assignments,
            vec![
                PalletAssignment::Assigned(1),
                PalletAssignment::Assigned(1),
                PalletAssignment::Assigned(2),
            ]
        );
    }

    #[test]
    fn test_overflow_leaves_pallet_state_untouched() {
        // 600 can never fit a 500 pallet; the following 200 is still
        // evaluated against pallet 1 with load 0
        let assignments = allocate(&lines(&[600.0, 200.0]), 500.0).unwrap();
        assert_eq!(
            assignments,
            vec![
                PalletAssignment::Overflow(1),
                PalletAssignment::Assigned(1),
            ]
        );
    }

    #[test]
    fn test_overflow_mid_stream_keeps_running_load() {
        // after 400 on pallet 1, the oversized 700 is tagged against
        // pallet 1 and the load stays 400, so 150 opens pallet 2
        let assignments = allocate(&lines(&[400.0, 700.0, 150.0]), 500.0).unwrap();
        assert_eq!(
            assignments,
            vec![
                PalletAssignment::Assigned(1),
                PalletAssignment::Overflow(1),
                PalletAssignment::Assigned(2),
            ]
        );
    }

    #[test]
    fn test_zero_weight_always_fits() {
        let assignments = allocate(&lines(&[500.0, 0.0, 0.0]), 500.0).unwrap();
        assert_eq!(
            assignments,
            vec![
                PalletAssignment::Assigned(1),
                PalletAssignment::Assigned(1),
                PalletAssignment::Assigned(1),
            ]
        );
    }

    #[test]
    fn test_pallet_numbers_non_decreasing() {
        let weights = [120.0, 380.0, 250.0, 250.0, 90.0, 480.0, 30.0];
        let assignments = allocate(&lines(&weights), 500.0).unwrap();
        let numbers: Vec<u32> = assignments.iter().filter_map(|a| a.pallet_no()).collect();
        assert!(numbers.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_no_pallet_exceeds_capacity() {
        let weights = [120.0, 380.0, 250.0, 250.0, 90.0, 480.0, 30.0];
        let capacity = 500.0;
        let all_lines = lines(&weights);
        let assignments = allocate(&all_lines, capacity).unwrap();

        let mut loads = std::collections::BTreeMap::new();
        for (line, assignment) in all_lines.iter().zip(&assignments) {
            if let Some(no) = assignment.pallet_no() {
                *loads.entry(no).or_insert(0.0) += line.total_weight_kg;
            }
        }
        for load in loads.values() {
            assert!(*load <= capacity);
        }
    }

    #[test]
    fn test_idempotent() {
        let all_lines = lines(&[300.0, 150.0, 600.0, 100.0]);
        let first = allocate(&all_lines, 500.0).unwrap();
        let second = allocate(&all_lines, 500.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let assignments = allocate(&[], 500.0).unwrap();
        assert!(assignments.is_empty());
    }

    #[test]
    fn test_non_positive_capacity_rejected() {
        assert!(matches!(
            allocate(&lines(&[1.0]), 0.0),
            Err(Error::InvalidCapacity(_))
        ));
        assert!(matches!(
            allocate(&lines(&[1.0]), -10.0),
            Err(Error::InvalidCapacity(_))
        ));
    }
}
