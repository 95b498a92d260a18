//! Excel export: report workbook and print-template fill

pub mod cell_map;
pub mod excel;

pub use cell_map::{load_cell_map, CellMap};
pub use excel::{export_report, fill_template};
