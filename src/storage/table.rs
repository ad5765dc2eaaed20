//! Percentage table storage
//!
//! Resolves which table to use, loads and validates it. The table is read
//! once at startup and then only borrowed.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use super::file_io::read_structured;
use crate::config::paths::BoothPaths;
use crate::config::settings::Settings;
use crate::error::BoothResult;
use crate::models::{BudgetData, BudgetLine, IncomeSource, LineRule};

/// Where the active table came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// Path named in settings
    Configured(PathBuf),
    /// Table file in the data directory
    DataDir(PathBuf),
    /// Compiled-in default
    BuiltIn,
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configured(path) => write!(f, "{} (from settings)", path.display()),
            Self::DataDir(path) => write!(f, "{}", path.display()),
            Self::BuiltIn => write!(f, "built-in default"),
        }
    }
}

/// Built-in table for a booth-renting stylist
pub fn default_budget_data() -> BudgetData {
    BudgetData {
        income: vec![
            BudgetLine::new("Service Revenue", "Services", 0.80).with_source(IncomeSource::Services),
            BudgetLine::new("Service Revenue", "Tips", 0.10).with_source(IncomeSource::Tips),
            BudgetLine::new("Product Revenue", "Retail", 0.10).with_source(IncomeSource::Retail),
        ],
        direct_expenses: vec![
            BudgetLine::new("Cost of Services", "Professional Supplies - Backbar", 0.15)
                .with_rule(LineRule::BackbarSupplies),
            BudgetLine::new("Cost of Retail", "Retail Cost of Goods Sold", 0.05)
                .with_rule(LineRule::RetailCostOfGoods),
            BudgetLine::new("Cost of Services", "Tools & Equipment", 0.02),
            BudgetLine::new("Professional Development", "Continuing Education", 0.02),
        ],
        indirect_expenses: vec![
            BudgetLine::new("Occupancy", "Rent Expense", 0.09).with_rule(LineRule::RentExpense),
            BudgetLine::new("Financial", "Bank Charges & Merchant Fees", 0.03)
                .with_rule(LineRule::MerchantFees),
            BudgetLine::new("Insurance", "Business Insurance", 0.01),
            BudgetLine::new("Compliance", "Licenses & Permits", 0.005),
            BudgetLine::new("Marketing", "Marketing & Advertising", 0.03),
            BudgetLine::new("Technology", "Booking Software & Phone", 0.015),
            BudgetLine::new("Operations", "Laundry & Linens", 0.01),
            BudgetLine::new("Taxes", "Tax Reserve", 0.20),
            BudgetLine::new("Owner", "Retirement Contribution", 0.05),
        ],
    }
}

/// Load and validate a table file (JSON or YAML)
pub fn load_table<P: AsRef<Path>>(path: P) -> BoothResult<BudgetData> {
    let data: BudgetData = read_structured(path.as_ref())?;
    data.validate()?;
    Ok(data)
}

/// Resolve the active table
///
/// Order: the settings `table_path`, then the data directory table file, then
/// the built-in default. A configured path that is missing is an error rather
/// than a silent fallback.
pub fn resolve_table(
    paths: &BoothPaths,
    settings: &Settings,
) -> BoothResult<(BudgetData, TableSource)> {
    let (data, source) = if let Some(configured) = &settings.table_path {
        (load_table(configured)?, TableSource::Configured(configured.clone()))
    } else if paths.table_file().exists() {
        let path = paths.table_file();
        (load_table(&path)?, TableSource::DataDir(path))
    } else {
        (default_budget_data(), TableSource::BuiltIn)
    };

    info!(source = %source, lines = data.line_count(), "loaded percentage table");
    Ok((data, source))
}
