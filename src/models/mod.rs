//! Core data models for booth-budget
//!
//! This module contains the static percentage table, the caller inputs, and
//! the calculated budget the engine produces.

pub mod budget_line;
pub mod cadence;
pub mod calculated;
pub mod inputs;
pub mod money;

pub use budget_line::{BudgetData, BudgetLine, IncomeSource, LineRule, Section};
pub use cadence::Cadence;
pub use calculated::{BaseAmount, BudgetTotals, CalculatedBudget, ExpenseLine, IncomeLine};
pub use inputs::{IncomeInputs, InputValidationError, RentTarget};
pub use money::{round_currency, Money};
