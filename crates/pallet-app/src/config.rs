//! Configuration management for pallet-planner
//!
//! Config stored at: ~/.config/pallet-planner/config.json

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use pallet_types::{ConfigError, Error, KeyMode, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Pallet weight cap in kilograms
    #[serde(default = "default_capacity_kg")]
    pub capacity_kg: f64,

    /// Which shipment column joins into the master table (name, part-number)
    #[serde(default)]
    pub key_mode: KeyMode,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// TOML cell map overriding the built-in template coordinates
    #[serde(default)]
    pub cell_map_path: Option<PathBuf>,
}

fn default_capacity_kg() -> f64 {
    500.0
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity_kg: default_capacity_kg(),
            key_mode: KeyMode::default(),
            output_format: default_output_format(),
            cell_map_path: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("pallet-planner");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Reject a non-positive capacity before any allocation runs
    pub fn validate(&self) -> Result<()> {
        if self.capacity_kg <= 0.0 {
            return Err(Error::InvalidCapacity(self.capacity_kg));
        }
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Pallet Planner Configuration")?;
        writeln!(f, "============================")?;
        writeln!(f)?;
        writeln!(f, "Capacity:       {} kg", self.capacity_kg)?;
        writeln!(f, "Key mode:       {}", self.key_mode)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Cell map:       {}",
            self.cell_map_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.capacity_kg, 500.0);
        assert_eq!(config.key_mode, KeyMode::Name);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_capacity() {
        let config = Config {
            capacity_kg: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidCapacity(_))
        ));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"capacity_kg": 750.0}"#).unwrap();
        assert_eq!(config.capacity_kg, 750.0);
        assert_eq!(config.key_mode, KeyMode::Name);
    }
}
