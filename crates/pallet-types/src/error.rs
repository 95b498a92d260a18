//! Error types for pallet-planner

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[allow(dead_code)]
    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Unreadable or unparseable uploaded table. Halts that upload only;
    /// already-registered data is left as-is.
    #[error("Unreadable table: {0}")]
    InputFormat(String),

    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// Non-positive pallet capacity, rejected before allocation runs.
    #[error("Pallet capacity must be positive, got {0} kg")]
    InvalidCapacity(f64),

    /// Template fill problems. The computed plan stays valid and can be
    /// re-exported once the template is corrected.
    #[error("Template error: {0}")]
    Template(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
