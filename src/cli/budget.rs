//! Budget CLI commands
//!
//! `booth income` and `booth rent` both build a weekly budget, project it to
//! the other cadences, and render it in the requested format.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::debug;

use crate::config::settings::Settings;
use crate::display::{format_budget_report, format_currency, format_percent};
use crate::error::{BoothError, BoothResult};
use crate::export::{export_csv, export_json, export_yaml, BudgetMode, BudgetReport};
use crate::models::inputs::parse_amount;
use crate::models::{BaseAmount, Cadence, IncomeInputs, Money, RentTarget};
use crate::services::BudgetEngine;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal table
    #[default]
    Table,
    /// JSON report (all cadences)
    Json,
    /// YAML report (all cadences)
    Yaml,
    /// CSV, one row per line item
    Csv,
}

/// Options shared by every budget command
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Show a single cadence (weekly, monthly, annual)
    #[arg(short, long)]
    pub cadence: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `booth income`
#[derive(Args, Debug, Clone)]
pub struct IncomeArgs {
    /// Weekly service revenue (e.g., "1000" or "$1,000.00")
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub services: String,

    /// Weekly tips
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub tips: String,

    /// Weekly retail sales
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub retail: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for `booth rent`
#[derive(Args, Debug, Clone)]
pub struct RentArgs {
    /// Weekly booth rent
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

fn parse_field(field: &str, raw: &str) -> BoothResult<f64> {
    parse_amount(raw).map_err(|e| BoothError::Validation(format!("{}: {}", field, e)))
}

/// Handle `booth income`
pub fn handle_income_command(
    engine: &BudgetEngine<'_>,
    settings: &Settings,
    args: IncomeArgs,
) -> BoothResult<()> {
    let inputs = IncomeInputs::new(
        parse_field("services", &args.services)?,
        parse_field("tips", &args.tips)?,
        parse_field("retail", &args.retail)?,
    );
    inputs
        .validate()
        .map_err(|e| BoothError::Validation(e.to_string()))?;

    let weekly = engine.from_income(&inputs);
    let heading = format!(
        "Budget from weekly income of {}",
        format_currency(weekly.total_income, &settings.currency_symbol)
    );

    let report = BudgetReport::new(BudgetMode::Income { inputs }, &weekly);
    render(&report, &heading, settings, &args.output)
}

/// Handle `booth rent`
pub fn handle_rent_command(
    engine: &BudgetEngine<'_>,
    settings: &Settings,
    args: RentArgs,
) -> BoothResult<()> {
    let target = RentTarget::new(parse_field("rent", &args.amount)?);
    target
        .validate()
        .map_err(|e| BoothError::Validation(e.to_string()))?;

    let rent_percent = engine.rent_percent()?;
    let weekly = engine.from_rent_at(&target, rent_percent);
    let heading = format!(
        "Budget for weekly rent of {} (rent at {} of {})",
        format_currency(Money::from_amount(target.amount), &settings.currency_symbol),
        format_percent(rent_percent),
        BaseAmount::ServicesAndTips
    );

    let report = BudgetReport::new(
        BudgetMode::Rent {
            target,
            rent_percent,
        },
        &weekly,
    );
    render(&report, &heading, settings, &args.output)
}

/// Cadences to show: the flag, then the configured default, then all three
fn selected_cadences(args: &OutputArgs, settings: &Settings) -> BoothResult<Vec<Cadence>> {
    match &args.cadence {
        Some(raw) => {
            let cadence =
                Cadence::parse(raw).map_err(|e| BoothError::Validation(e.to_string()))?;
            Ok(vec![cadence])
        }
        None => Ok(match settings.default_cadence {
            Some(cadence) => vec![cadence],
            None => Cadence::all().to_vec(),
        }),
    }
}

fn render(
    report: &BudgetReport,
    heading: &str,
    settings: &Settings,
    args: &OutputArgs,
) -> BoothResult<()> {
    let cadences = selected_cadences(args, settings)?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            debug!(path = %path.display(), "writing report to file");
            let file = File::create(path).map_err(|e| {
                BoothError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Table => {
            writeln!(writer, "{}", heading)?;
            writeln!(writer)?;
            write!(
                writer,
                "{}",
                format_budget_report(&report.projection(), &cadences, &settings.currency_symbol)
            )?;
        }
        OutputFormat::Json => export_json(report, &mut writer, true)?,
        OutputFormat::Yaml => export_yaml(report, &mut writer)?,
        OutputFormat::Csv => export_csv(&report.projection(), &mut writer)?,
    }

    writer.flush()?;

    if let Some(path) = &args.output {
        eprintln!("Wrote {:?} report to {}", args.format, path.display());
    }
    Ok(())
}
