//! Application service layer - plan orchestration, session state, config, export

pub mod app;
pub mod config;
pub mod export;
pub mod session;
