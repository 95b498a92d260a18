//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pallet_types::{KeyMode, OutputFormat, WeightUnit};

#[derive(Parser)]
#[command(name = "pallet-planner")]
#[command(version)]
#[command(about = "Allocate shipment line-items to pallets under a weight cap")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Allocate a shipment CSV against a weight master CSV
    Plan {
        /// Path to shipment CSV
        shipment: PathBuf,

        /// Path to master CSV (key column + unit weight column)
        #[arg(long, short = 'm')]
        master: PathBuf,

        /// Pallet capacity in kg (overrides config)
        #[arg(long)]
        capacity: Option<f64>,

        /// Join key mode (name, part-number). Uses config value if not specified.
        #[arg(long)]
        key_mode: Option<KeyMode>,

        /// Unit of the master weight column
        #[arg(long, default_value_t = WeightUnit::Kilograms)]
        unit: WeightUnit,

        /// Key column in the shipment table (guessed from headers if omitted)
        #[arg(long)]
        key_column: Option<String>,

        /// Quantity column in the shipment table (guessed if omitted)
        #[arg(long)]
        quantity_column: Option<String>,

        /// Display-name column in the shipment table (guessed if omitted)
        #[arg(long)]
        name_column: Option<String>,

        /// Key column in the master table (guessed if omitted)
        #[arg(long)]
        master_key_column: Option<String>,

        /// Weight column in the master table (guessed if omitted)
        #[arg(long)]
        master_weight_column: Option<String>,

        /// Save the plan as JSON (input for `export`)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Save a report workbook (.xlsx)
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Fill the print template from a saved plan
    Export {
        /// Path to JSON plan file (from `plan -o`)
        plan: PathBuf,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// TOML cell map overriding the built-in template coordinates
        #[arg(long)]
        cell_map: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default pallet capacity in kg
        #[arg(long)]
        set_capacity: Option<f64>,

        /// Set default join key mode (name, part-number)
        #[arg(long)]
        set_key_mode: Option<KeyMode>,

        /// Set default output format (json, table)
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the cell map TOML used by `export`
        #[arg(long)]
        set_cell_map: Option<PathBuf>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
