//! Pallet Planner - shipment line-item allocation onto shipping pallets
//!
//! A CLI tool that joins shipment rows against a weight master, packs them
//! onto pallets under a weight cap, and renders the result for printing.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
