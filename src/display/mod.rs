//! Display formatting for terminal output
//!
//! Formats calculated budgets and the percentage table for the terminal.

pub mod budget;
pub mod table;

pub use budget::{format_budget_report, format_currency, format_percent};
pub use table::format_percentage_table;
