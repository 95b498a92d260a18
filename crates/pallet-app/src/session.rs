//! Session-scoped state owned by the shell
//!
//! The engine stays stateless and pure between calls; whatever must
//! survive across user interactions (the registered master table, the
//! last successful plan) is held here and passed into each operation.
//! One session per operator, no cross-session sharing.

use pallet_domain::model::MasterTable;

use crate::app::PlanResult;

#[derive(Debug, Default)]
pub struct Session {
    master: Option<MasterTable>,
    last_plan: Option<PlanResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registered master table. Callers only reach this after
    /// a successful build, so a failed upload never clobbers the previous
    /// registration.
    pub fn register_master(&mut self, master: MasterTable) {
        self.master = Some(master);
    }

    pub fn master(&self) -> Option<&MasterTable> {
        self.master.as_ref()
    }

    /// Store a successful calculation. A failed run never reaches this,
    /// leaving the prior result available.
    pub fn store_plan(&mut self, plan: PlanResult) {
        self.last_plan = Some(plan);
    }

    pub fn last_plan(&self) -> Option<&PlanResult> {
        self.last_plan.as_ref()
    }

    pub fn clear(&mut self) {
        self.master = None;
        self.last_plan = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pallet_domain::model::Table;
    use pallet_domain::service::{build_master_table, ShipmentColumns};
    use pallet_types::WeightUnit;

    fn master_from(rows: Vec<Vec<&str>>) -> MasterTable {
        let table = Table::new(
            vec!["品名".to_string(), "単重".to_string()],
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
        );
        build_master_table(&table, "品名", "単重", WeightUnit::Kilograms).unwrap()
    }

    #[test]
    fn test_failed_upload_preserves_registered_master() {
        let mut session = Session::new();
        session.register_master(master_from(vec![vec!["部品A", "2.0"]]));

        // a bad upload errors before register_master is ever called
        let bad = Table::new(vec!["別の列".to_string()], vec![]);
        let result = build_master_table(&bad, "品名", "単重", WeightUnit::Kilograms);
        assert!(result.is_err());

        let master = session.master().unwrap();
        assert_eq!(master.unit_weight_kg("部品A"), Some(2.0));
    }

    #[test]
    fn test_failed_plan_preserves_last_result() {
        let mut session = Session::new();
        session.register_master(master_from(vec![vec!["部品A", "100.0"]]));

        let shipment = Table::new(
            vec!["品名".to_string(), "数量".to_string()],
            vec![vec!["部品A".to_string(), "2".to_string()]],
        );
        let columns = ShipmentColumns {
            key: "品名".to_string(),
            quantity: "数量".to_string(),
            display_name: "品名".to_string(),
        };

        let plan =
            crate::app::run_plan(&shipment, session.master().unwrap(), &columns, 500.0).unwrap();
        session.store_plan(plan);

        // zero capacity is rejected before allocation; store_plan is not reached
        let failed =
            crate::app::run_plan(&shipment, session.master().unwrap(), &columns, 0.0);
        assert!(failed.is_err());

        let last = session.last_plan().unwrap();
        assert_eq!(last.lines.len(), 1);
        assert!((last.grand_total_kg - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_clear() {
        let mut session = Session::new();
        session.register_master(master_from(vec![vec!["部品A", "2.0"]]));
        session.clear();
        assert!(session.master().is_none());
        assert!(session.last_plan().is_none());
    }
}
