//! Domain model types

pub mod master;
pub mod pallet;
pub mod shipment;
pub mod table;

pub use master::{MasterRecord, MasterTable};
pub use pallet::{PalletAssignment, PalletSummary};
pub use shipment::ShipmentLine;
pub use table::Table;
