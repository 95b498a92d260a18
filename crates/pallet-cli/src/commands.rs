//! Command handlers

use std::path::PathBuf;

use pallet_app::app::{run_plan, PlanResult};
use pallet_app::config::Config;
use pallet_app::export::{export_report, fill_template, load_cell_map, CellMap};
use pallet_domain::service::{build_master_table, ShipmentColumns};
use pallet_infra::column_guess::{
    guess_display_name_column, guess_key_column, guess_quantity_column, guess_weight_column,
};
use pallet_infra::load_table_from_csv;
use pallet_types::{Error, KeyMode, OutputFormat, Result, WeightUnit};

use crate::cli::{Cli, Commands};
use crate::output::print_plan;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match &cli.command {
        Commands::Plan {
            shipment,
            master,
            capacity,
            key_mode,
            unit,
            key_column,
            quantity_column,
            name_column,
            master_key_column,
            master_weight_column,
            output,
            report,
        } => {
            let capacity_kg = capacity.unwrap_or(config.capacity_kg);
            let key_mode = key_mode.unwrap_or(config.key_mode);
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_plan(
                &cli,
                shipment.clone(),
                master.clone(),
                capacity_kg,
                key_mode,
                *unit,
                PlanColumns {
                    key: key_column.clone(),
                    quantity: quantity_column.clone(),
                    name: name_column.clone(),
                    master_key: master_key_column.clone(),
                    master_weight: master_weight_column.clone(),
                },
                output_format,
                output.clone(),
                report.clone(),
            )
        }

        Commands::Export {
            plan,
            output,
            cell_map,
        } => cmd_export(
            &config,
            plan.clone(),
            output.clone(),
            cell_map.clone(),
            cli.verbose,
        ),

        Commands::Config {
            show,
            set_capacity,
            set_key_mode,
            set_output,
            set_cell_map,
            reset,
        } => cmd_config(
            *show,
            *set_capacity,
            *set_key_mode,
            *set_output,
            set_cell_map.clone(),
            *reset,
        ),
    }
}

/// Optional explicit column names from the command line
struct PlanColumns {
    key: Option<String>,
    quantity: Option<String>,
    name: Option<String>,
    master_key: Option<String>,
    master_weight: Option<String>,
}

#[allow(clippy::too_many_arguments)]
fn cmd_plan(
    cli: &Cli,
    shipment_path: PathBuf,
    master_path: PathBuf,
    capacity_kg: f64,
    key_mode: KeyMode,
    unit: WeightUnit,
    columns: PlanColumns,
    output_format: OutputFormat,
    output: Option<PathBuf>,
    report: Option<PathBuf>,
) -> Result<()> {
    if !master_path.exists() {
        return Err(Error::FileNotFound(format!(
            "Master file not found: {}",
            master_path.display()
        )));
    }
    if !shipment_path.exists() {
        return Err(Error::FileNotFound(format!(
            "Shipment file not found: {}",
            shipment_path.display()
        )));
    }

    if cli.verbose {
        eprintln!("Loading master from: {}", master_path.display());
    }
    let master_table = load_table_from_csv(&master_path)?;

    let master_key = resolve_column(&columns.master_key, || {
        guess_key_column(&master_table.headers, key_mode)
    })?;
    let master_weight = resolve_column(&columns.master_weight, || {
        guess_weight_column(&master_table.headers)
    })?;
    let master = build_master_table(&master_table, &master_key, &master_weight, unit)?;
    if cli.verbose {
        eprintln!("  Registered {} master records", master.len());
    }

    if cli.verbose {
        eprintln!("Loading shipment from: {}", shipment_path.display());
    }
    let shipment = load_table_from_csv(&shipment_path)?;

    let key = resolve_column(&columns.key, || {
        guess_key_column(&shipment.headers, key_mode)
    })?;
    let quantity = resolve_column(&columns.quantity, || {
        guess_quantity_column(&shipment.headers)
    })?;
    // display name falls back to the key column when nothing better exists
    let name = columns
        .name
        .clone()
        .or_else(|| guess_display_name_column(&shipment.headers).map(String::from))
        .unwrap_or_else(|| key.clone());

    let shipment_columns = ShipmentColumns {
        key,
        quantity,
        display_name: name,
    };
    if cli.verbose {
        eprintln!(
            "  Loaded {} shipment lines (capacity {} kg, key mode {})",
            shipment.len(),
            capacity_kg,
            key_mode
        );
    }

    let plan = run_plan(&shipment, &master, &shipment_columns, capacity_kg)?;

    print_plan(output_format, &plan)?;

    if !plan.unmatched_keys.is_empty() {
        eprintln!(
            "警告: マスタ未登録の品目が{}件あります",
            plan.unmatched_keys.len()
        );
    }
    if plan.overflow_count() > 0 {
        eprintln!(
            "警告: パレット上限を単体で超える明細が{}件あります",
            plan.overflow_count()
        );
    }

    if let Some(output_path) = output {
        let content = serde_json::to_string_pretty(&plan)?;
        std::fs::write(&output_path, content)?;
        println!("Plan saved to: {}", output_path.display());
    }

    if let Some(report_path) = report {
        export_report(&plan, &report_path)?;
        println!("Report saved to: {}", report_path.display());
    }

    Ok(())
}

fn resolve_column<'a, F>(explicit: &Option<String>, guess: F) -> Result<String>
where
    F: FnOnce() -> Option<&'a str>,
{
    if let Some(name) = explicit {
        return Ok(name.clone());
    }
    guess().map(String::from).ok_or_else(|| {
        Error::MissingColumn(
            "could not guess the column from the headers; specify it explicitly".to_string(),
        )
    })
}

fn cmd_export(
    config: &Config,
    plan_path: PathBuf,
    output: Option<PathBuf>,
    cell_map_path: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    if !plan_path.exists() {
        return Err(Error::FileNotFound(format!(
            "Plan file not found: {}",
            plan_path.display()
        )));
    }

    let content = std::fs::read_to_string(&plan_path)?;
    let plan: PlanResult = serde_json::from_str(&content)?;

    let cell_map = match cell_map_path.or_else(|| config.cell_map_path.clone()) {
        Some(path) => {
            if verbose {
                eprintln!("Using cell map: {}", path.display());
            }
            load_cell_map(&path)?
        }
        None => CellMap::default(),
    };

    let output_path = output.unwrap_or_else(|| plan_path.with_extension("xlsx"));
    let today = chrono::Local::now().date_naive();

    fill_template(
        &plan.summary_map(),
        plan.grand_total_kg,
        &cell_map,
        today,
        &output_path,
    )?;

    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_capacity: Option<f64>,
    set_key_mode: Option<KeyMode>,
    set_output: Option<OutputFormat>,
    set_cell_map: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(capacity_kg) = set_capacity {
        if capacity_kg <= 0.0 {
            return Err(Error::InvalidCapacity(capacity_kg));
        }
        config.capacity_kg = capacity_kg;
        modified = true;
    }

    if let Some(key_mode) = set_key_mode {
        config.key_mode = key_mode;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = set_cell_map {
        config.cell_map_path = Some(path);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
