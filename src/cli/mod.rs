//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the budget engine.

pub mod budget;
pub mod table;

pub use budget::{
    handle_income_command, handle_rent_command, IncomeArgs, OutputArgs, OutputFormat, RentArgs,
};
pub use table::{handle_table_command, TableCommands};
