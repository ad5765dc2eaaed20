//! Cadence projection
//!
//! Projects a canonical weekly budget to the monthly and annual cadences.

use serde::{Deserialize, Serialize};

use crate::models::{Cadence, CalculatedBudget};

/// Multiply every monetary field of `budget` by `factor` and re-round
pub fn scale_budget(budget: &CalculatedBudget, factor: f64) -> CalculatedBudget {
    budget.scaled(factor)
}

/// One calculated budget at each display cadence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetProjection {
    pub weekly: CalculatedBudget,
    pub monthly: CalculatedBudget,
    pub annual: CalculatedBudget,
}

impl BudgetProjection {
    /// Project a weekly budget; each cadence is scaled from the weekly result
    pub fn from_weekly(weekly: &CalculatedBudget) -> Self {
        Self {
            weekly: scale_budget(weekly, Cadence::Weekly.factor()),
            monthly: scale_budget(weekly, Cadence::Monthly.factor()),
            annual: scale_budget(weekly, Cadence::Annual.factor()),
        }
    }

    /// The budget at one cadence
    pub fn at(&self, cadence: Cadence) -> &CalculatedBudget {
        match cadence {
            Cadence::Weekly => &self.weekly,
            Cadence::Monthly => &self.monthly,
            Cadence::Annual => &self.annual,
        }
    }
}
