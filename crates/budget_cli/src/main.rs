//! Command-line entry point over `budget_core`.
//!
//! # Responsibility
//! - Load plain JSON inputs and hand them to the core as in-memory values.
//! - Render computed results; all arithmetic stays in the core.

use anyhow::{Context, Result};
use budget_core::{
    assignment_export, calculate_business_days_excluding_holidays, calculate_end_date,
    calculate_project_summary, core_version, date_key, format_currency, format_percentage,
    init_logging_from_config, parse_date_key, summary_export, Assignment, CoreConfig, HolidaySet,
    ProjectConfig,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::info;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "budget", about = "Project cost and schedule calculator")]
struct Cli {
    /// JSON config file; defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the core version.
    Version,
    /// Compute subtotal, tax, cost, ROI and margin for a project file.
    Summary {
        #[arg(long)]
        input: PathBuf,
    },
    /// Count business days in an inclusive date range.
    BusinessDays {
        #[arg(long, value_parser = parse_date_arg)]
        start: NaiveDate,
        #[arg(long, value_parser = parse_date_arg)]
        end: NaiveDate,
        #[arg(long = "holiday", value_parser = parse_date_arg)]
        holidays: Vec<NaiveDate>,
    },
    /// Find the date on which the given number of business days completes.
    EndDate {
        #[arg(long, value_parser = parse_date_arg)]
        start: NaiveDate,
        #[arg(long, allow_negative_numbers = true)]
        days: i64,
        #[arg(long = "holiday", value_parser = parse_date_arg)]
        holidays: Vec<NaiveDate>,
    },
    /// Write assignment rows (or the summary with `--summary`) as CSV.
    Export {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        summary: bool,
    },
}

/// Project file shape: `{ "project": {...}, "assignments": [...] }`.
#[derive(Debug, Deserialize)]
struct ProjectInput {
    #[serde(default)]
    project: ProjectConfig,
    #[serde(default)]
    assignments: Vec<Assignment>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CoreConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CoreConfig::default(),
    };
    init_logging_from_config(&config).context("initializing logging")?;

    match cli.command {
        Command::Version => println!("budget_core version={}", core_version()),
        Command::Summary { input } => {
            let input = read_input(&input)?;
            let summary = calculate_project_summary(&input.assignments, &input.project)?;
            let symbol = config.display_symbol();
            let symbol = Some(symbol.as_str());
            println!("subtotal       {}", format_currency(summary.subtotal, symbol));
            println!("tax            {}", format_currency(summary.tax, symbol));
            println!("cost           {}", format_currency(summary.cost, symbol));
            println!(
                "proposed price {}",
                format_currency(summary.proposed_price, symbol)
            );
            println!("roi            {}", format_percentage(summary.roi));
            println!("margin         {}", format_percentage(summary.margin));
            info!(
                "event=cli_summary module=cli status=ok assignments={}",
                input.assignments.len()
            );
        }
        Command::BusinessDays {
            start,
            end,
            holidays,
        } => {
            let days = calculate_business_days_excluding_holidays(start, end, &holidays);
            println!("{days}");
        }
        Command::EndDate {
            start,
            days,
            holidays,
        } => {
            let holidays: HolidaySet = holidays.into_iter().collect();
            let end = calculate_end_date(start, days, &holidays)
                .with_context(|| format!("projecting {days} business days"))?;
            println!("{}", date_key(end));
        }
        Command::Export { input, summary } => {
            let input = read_input(&input)?;
            let csv = if summary {
                summary_export(&calculate_project_summary(
                    &input.assignments,
                    &input.project,
                )?)
            } else {
                assignment_export(&input.assignments)?
            };
            println!("{csv}");
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<ProjectInput> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading input {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing input {}", path.display()))
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date_key(value).map_err(|err| err.to_string())
}
