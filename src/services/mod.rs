//! Service layer for booth-budget
//!
//! The service layer holds the calculation engine and the cadence projection
//! on top of the static percentage table.

pub mod budget;
pub mod projection;

pub use budget::{BudgetEngine, IncomeBasis, RentPolicy, LEGACY_RENT_PERCENT};
pub use projection::{scale_budget, BudgetProjection};
