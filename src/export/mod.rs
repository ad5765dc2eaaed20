//! Export module for booth-budget
//!
//! Provides budget report export in multiple formats:
//! - CSV: one row per line item, spreadsheet-compatible
//! - JSON: machine-readable full report
//! - YAML: human-readable full report

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use json::{export_json, BudgetMode, BudgetReport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
