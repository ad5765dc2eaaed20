//! Percentage table CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::{format_percent, format_percentage_table};
use crate::error::BoothResult;
use crate::models::{BudgetData, LineRule};
use crate::storage::{load_table, TableSource};

/// Table subcommands
#[derive(Subcommand, Debug)]
pub enum TableCommands {
    /// Show the active percentage table
    Show,

    /// Validate a table file (defaults to the active table)
    Validate {
        /// Table file to check (JSON or YAML)
        path: Option<PathBuf>,
    },
}

/// Handle a table command
pub fn handle_table_command(
    data: &BudgetData,
    source: &TableSource,
    cmd: TableCommands,
) -> BoothResult<()> {
    match cmd {
        TableCommands::Show => {
            println!("Percentage table: {}", source);
            println!();
            print!("{}", format_percentage_table(data));
        }
        TableCommands::Validate { path } => {
            // The active table was already validated when it was loaded
            let (checked, label) = match path {
                Some(path) => (load_table(&path)?, path.display().to_string()),
                None => (data.clone(), source.to_string()),
            };

            println!("{}: OK ({} lines)", label, checked.line_count());
            for warning in table_warnings(&checked) {
                println!("  warning: {}", warning);
            }
        }
    }

    Ok(())
}

/// Non-fatal issues worth pointing out in a table
pub fn table_warnings(data: &BudgetData) -> Vec<String> {
    let mut warnings = Vec::new();

    let income_share: f64 = data.income.iter().map(|l| l.percent_of_income).sum();
    if !data.income.is_empty() && (income_share - 1.0).abs() > 1e-6 {
        warnings.push(format!(
            "income shares add up to {}, not 100%",
            format_percent(income_share)
        ));
    }

    match data.find_indirect_rule(LineRule::RentExpense) {
        None => warnings.push("no Rent Expense line; rent-based budgets will fail".to_string()),
        Some(line) if line.percent_of_income <= 0.0 => warnings.push(
            "Rent Expense is 0%; rent-based budgets will fail".to_string(),
        ),
        Some(_) => {}
    }

    for line in &data.income {
        if line.source().is_none() {
            warnings.push(format!(
                "income line '{}' matches no income stream and will always be zero",
                line.line_item
            ));
        }
    }

    warnings
}
