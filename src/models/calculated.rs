//! Calculated budget models
//!
//! A `CalculatedBudget` is derived fresh on every calculation and has the same
//! shape whichever entry mode produced it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// The amount an expense percentage is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseAmount {
    #[serde(rename = "Services")]
    Services,
    #[serde(rename = "Retail")]
    Retail,
    #[serde(rename = "Services + Tips")]
    ServicesAndTips,
    #[serde(rename = "Services + Tips + Retail")]
    TotalIncome,
}

impl BaseAmount {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Services => "Services",
            Self::Retail => "Retail",
            Self::ServicesAndTips => "Services + Tips",
            Self::TotalIncome => "Services + Tips + Retail",
        }
    }
}

impl fmt::Display for BaseAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A computed income line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeLine {
    pub name: String,
    pub amount: Money,
    /// Fraction of total income
    pub percent: f64,
}

/// A computed expense line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub name: String,
    pub amount: Money,
    /// Rounded amount as a fraction of `base`
    pub percent: f64,
    #[serde(rename = "baseLabel")]
    pub base: BaseAmount,
}

/// Section subtotals and the resulting net income
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTotals {
    pub direct_expenses: Money,
    pub indirect_expenses: Money,
    pub total_expenses: Money,
    pub net_income: Money,
}

/// A fully itemized budget at one cadence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedBudget {
    pub total_income: Money,
    pub income_lines: Vec<IncomeLine>,
    pub direct_expenses: Vec<ExpenseLine>,
    pub indirect_expenses: Vec<ExpenseLine>,
    pub totals: BudgetTotals,
}

impl CalculatedBudget {
    /// Multiply every monetary field by `factor`, re-rounding each one
    ///
    /// Percentages and base labels are carried over untouched. Always scale
    /// from the weekly result; scaling an already scaled budget compounds
    /// rounding error.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            total_income: self.total_income.scale(factor),
            income_lines: self
                .income_lines
                .iter()
                .map(|line| IncomeLine {
                    amount: line.amount.scale(factor),
                    ..line.clone()
                })
                .collect(),
            direct_expenses: scale_expenses(&self.direct_expenses, factor),
            indirect_expenses: scale_expenses(&self.indirect_expenses, factor),
            totals: BudgetTotals {
                direct_expenses: self.totals.direct_expenses.scale(factor),
                indirect_expenses: self.totals.indirect_expenses.scale(factor),
                total_expenses: self.totals.total_expenses.scale(factor),
                net_income: self.totals.net_income.scale(factor),
            },
        }
    }

    /// Look up an income line by name
    pub fn income_line(&self, name: &str) -> Option<&IncomeLine> {
        self.income_lines.iter().find(|l| l.name == name)
    }

    /// Look up a direct or indirect expense line by name
    pub fn expense_line(&self, name: &str) -> Option<&ExpenseLine> {
        self.direct_expenses
            .iter()
            .chain(self.indirect_expenses.iter())
            .find(|l| l.name == name)
    }
}

fn scale_expenses(lines: &[ExpenseLine], factor: f64) -> Vec<ExpenseLine> {
    lines
        .iter()
        .map(|line| ExpenseLine {
            amount: line.amount.scale(factor),
            ..line.clone()
        })
        .collect()
}
