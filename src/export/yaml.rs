//! YAML export functionality
//!
//! Human-readable export of a budget report.

use std::io::Write;

use crate::error::{BoothError, BoothResult};
use crate::export::json::BudgetReport;

/// Export a report to YAML
pub fn export_yaml<W: Write>(report: &BudgetReport, writer: &mut W) -> BoothResult<()> {
    writeln!(writer, "# booth-budget report").map_err(|e| BoothError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", report.generated_at)
        .map_err(|e| BoothError::Export(e.to_string()))?;
    writeln!(writer, "# Amounts are in cents").map_err(|e| BoothError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, report).map_err(|e| BoothError::Export(e.to_string()))?;

    Ok(())
}
