//! fabcalc - CLI tool to print order weights and reports from a workshop snapshot.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use fabcalc_rs::render::{
    render_cutting_task, render_grouped_report, render_order_detail, render_totals,
};
use fabcalc_rs::{
    cutting_task, group_by_material_and_stock, order_detail, validate_order, FabError, MassUnit,
    ReportConfig, Workshop,
};

/// Which view of the order to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportKind {
    /// Every line with its weights
    Detail,
    /// Lines grouped by material and stock item
    Grouped,
    /// Lines bucketed by section type
    Cutting,
    /// Order totals only
    Totals,
}

/// Compute part weights and order reports for a metal fabrication shop.
#[derive(Parser, Debug)]
#[command(name = "fabcalc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Workshop snapshot (JSON) path
    #[arg(short, long)]
    input: PathBuf,

    /// Order ID
    #[arg(long)]
    order: i32,

    /// Report to print
    #[arg(short, long, value_enum, default_value = "detail")]
    report: ReportKind,

    /// Mass unit (g or kg)
    #[arg(short, long, default_value = "kg")]
    unit: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Validate the order only, don't print a report
    #[arg(long)]
    validate: bool,

    /// Copy the order under this new order number
    #[arg(long)]
    copy_as: Option<String>,

    /// Where to write the snapshot after --copy-as (defaults to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(err) = run() {
        error!("{:#}", err);
        // Storage errors carry their own code, anything else exits with 1
        let code = err.downcast_ref::<FabError>().map_or(1, FabError::code_value);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let unit = MassUnit::from_str_loose(&args.unit)
        .with_context(|| format!("Unknown mass unit '{}'", args.unit))?;
    let config = ReportConfig::new(unit);

    let mut workshop = Workshop::load(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    if let Some(number) = &args.copy_as {
        let copy_id = workshop.copy_order(args.order, number.as_str(), Utc::now())?;
        let output_path = args.output.clone().unwrap_or_else(|| args.input.clone());
        workshop
            .save(&output_path)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        info!("Copied order {} as #{} (id {})", args.order, number, copy_id);
        return Ok(());
    }

    let order = workshop
        .order(args.order)
        .with_context(|| format!("Failed to resolve order {}", args.order))?;

    info!("{}: {} line(s)", order.label(), order.items.len());

    // Validate
    let validation = validate_order(&order);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    // Validate-only mode
    if args.validate {
        if !validation.passed {
            anyhow::bail!("Validation failed");
        }
        info!("Validation passed");
        return Ok(());
    }

    let text = match (args.report, args.json) {
        (ReportKind::Detail, true) => serde_json::to_string_pretty(&order_detail(&order))?,
        (ReportKind::Detail, false) => render_order_detail(&order, &config),
        (ReportKind::Grouped, json) => {
            let report = group_by_material_and_stock(&order);
            if json {
                serde_json::to_string_pretty(&report)?
            } else {
                render_grouped_report(&order, &report, &config)
            }
        }
        (ReportKind::Cutting, json) => {
            let task = cutting_task(&order);
            if json {
                serde_json::to_string_pretty(&task)?
            } else {
                render_cutting_task(&order, &task)
            }
        }
        (ReportKind::Totals, true) => serde_json::to_string_pretty(&order.totals())?,
        (ReportKind::Totals, false) => render_totals(&order.totals(), &config),
    };

    println!("{}", text);

    Ok(())
}
