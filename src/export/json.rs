//! JSON export functionality
//!
//! Exports a calculated budget at all three cadences together with the inputs
//! that produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BoothError, BoothResult};
use crate::models::{CalculatedBudget, IncomeInputs, RentTarget};
use crate::services::BudgetProjection;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// How the budget was derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BudgetMode {
    /// From actual weekly income
    Income { inputs: IncomeInputs },
    /// Backwards from a rent figure
    Rent { target: RentTarget, rent_percent: f64 },
}

/// A complete budget export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetReport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub generated_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    #[serde(flatten)]
    pub mode: BudgetMode,

    pub weekly: CalculatedBudget,
    pub monthly: CalculatedBudget,
    pub annual: CalculatedBudget,
}

impl BudgetReport {
    /// Build a report from a weekly budget
    pub fn new(mode: BudgetMode, weekly: &CalculatedBudget) -> Self {
        let BudgetProjection {
            weekly,
            monthly,
            annual,
        } = BudgetProjection::from_weekly(weekly);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            mode,
            weekly,
            monthly,
            annual,
        }
    }

    /// The three cadences as a projection
    pub fn projection(&self) -> BudgetProjection {
        BudgetProjection {
            weekly: self.weekly.clone(),
            monthly: self.monthly.clone(),
            annual: self.annual.clone(),
        }
    }
}

/// Export a report to JSON
pub fn export_json<W: Write>(report: &BudgetReport, writer: &mut W, pretty: bool) -> BoothResult<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, report)
    } else {
        serde_json::to_writer(&mut *writer, report)
    };
    written.map_err(|e| BoothError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| BoothError::Export(e.to_string()))?;
    Ok(())
}
