//! Domain layer: data model and the allocation engine services.
//!
//! Everything here is pure and synchronous. The engine receives plain
//! tabular data with already-resolved column names and returns palletized
//! results; file loading and rendering live in the infra and app layers.

pub mod model;
pub mod service;
