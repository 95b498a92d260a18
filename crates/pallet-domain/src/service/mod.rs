//! Engine services

pub mod allocator;
pub mod summary;
pub mod weight_resolver;

pub use allocator::allocate;
pub use summary::{grand_total, summarize, summary_map};
pub use weight_resolver::{
    build_master_table, resolve_weights, ResolvedShipment, ShipmentColumns,
};
