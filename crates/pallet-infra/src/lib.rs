//! Infrastructure layer: CSV table loading and header heuristics

pub mod column_guess;
pub mod csv_table;

pub use csv_table::load_table_from_csv;
