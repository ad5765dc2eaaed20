//! booth-budget - budget calculator for booth-renting beauty professionals
//!
//! Turns either a week's income (services, tips, retail) or a weekly booth
//! rent into an itemized budget of income, direct expenses, indirect expenses
//! and net income, using a static table of percentages. Every budget is
//! calculated weekly and projected to monthly and annual figures.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Percentage table, inputs and calculated budgets
//! - `storage`: Table loading and first-run setup
//! - `services`: The budget engine and cadence projection
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML reports
//! - `cli`: Command handlers for the `booth` binary
//!
//! # Example
//!
//! ```rust
//! use booth_budget::models::IncomeInputs;
//! use booth_budget::services::{BudgetEngine, BudgetProjection};
//! use booth_budget::storage::default_budget_data;
//!
//! let table = default_budget_data();
//! let weekly = BudgetEngine::new(&table).from_income(&IncomeInputs::new(1000.0, 200.0, 300.0));
//! let projection = BudgetProjection::from_weekly(&weekly);
//! assert_eq!(projection.annual.total_income.to_f64(), 78_000.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BoothError, BoothResult};
