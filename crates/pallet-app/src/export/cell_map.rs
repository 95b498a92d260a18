//! Fixed-coordinate cell mapping for the print template
//!
//! The print layout addresses pallets by fixed cells. The mapping is
//! swappable: the built-in default reproduces the reference template
//! (pallets 5 and 6 sit one row lower than the sequence suggests), and a
//! TOML file can replace it wholesale when the template changes.

use std::path::Path;

use serde::Deserialize;

use pallet_types::{Error, Result};

/// Target cells for the template fill
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CellMap {
    /// Cell for pallet `i + 1`
    pub pallet_cells: Vec<String>,
    pub grand_total_cell: String,
    pub date_cells: DateCells,
}

/// Three cells for the 年 / 月 / 日 boxes of the print header
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DateCells {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl Default for CellMap {
    fn default() -> Self {
        Self {
            pallet_cells: ["H5", "H6", "H7", "H8", "H10", "H11"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            grand_total_cell: "H13".to_string(),
            date_cells: DateCells::default(),
        }
    }
}

impl Default for DateCells {
    fn default() -> Self {
        Self {
            year: "E2".to_string(),
            month: "G2".to_string(),
            day: "I2".to_string(),
        }
    }
}

impl CellMap {
    /// Highest pallet number the map can place
    pub fn max_pallets(&self) -> usize {
        self.pallet_cells.len()
    }
}

/// Load a cell map from a TOML file
pub fn load_cell_map(path: &Path) -> Result<CellMap> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Template(format!("{}: {}", path.display(), e)))?;
    toml::from_str(&content).map_err(|e| Error::Template(format!("{}: {}", path.display(), e)))
}

/// Parse an "H5"-style reference into a 0-based (row, column) pair
pub fn parse_cell_ref(cell: &str) -> Result<(u32, u16)> {
    let cell = cell.trim();
    let split = cell.find(|c: char| c.is_ascii_digit()).unwrap_or(0);
    let (letters, digits) = cell.split_at(split);

    if letters.is_empty() || digits.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic())
    {
        return Err(Error::Template(format!("invalid cell reference '{}'", cell)));
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }

    let row: u32 = digits
        .parse()
        .map_err(|_| Error::Template(format!("invalid cell reference '{}'", cell)))?;
    if row == 0 {
        return Err(Error::Template(format!("invalid cell reference '{}'", cell)));
    }

    Ok((row - 1, (col - 1) as u16))
}
