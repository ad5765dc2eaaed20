//! Static percentage table models
//!
//! The table is a chart of accounts for a self-employed service business: an
//! income section and two expense sections, each line carrying a percentage of
//! its base amount. A few lines follow special base rules; those are
//! identified by a stable key rather than by their display text.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{BoothError, BoothResult};

/// Line items whose amount is not a plain percentage of Services + Tips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRule {
    /// Back-bar supplies, a fixed share of service revenue
    BackbarSupplies,
    /// Cost of retail goods, a fixed share of retail revenue
    RetailCostOfGoods,
    /// Card processing fees, charged against every dollar taken in
    MerchantFees,
    /// Rent, the anchor line for deriving income from a rent target
    RentExpense,
}

impl LineRule {
    /// Infer a rule from the display name used by legacy tables
    pub fn from_line_item(name: &str) -> Option<Self> {
        match name.trim() {
            "Professional Supplies - Backbar" => Some(Self::BackbarSupplies),
            "Retail Cost of Goods Sold" => Some(Self::RetailCostOfGoods),
            "Bank Charges & Merchant Fees" => Some(Self::MerchantFees),
            "Rent Expense" => Some(Self::RentExpense),
            _ => None,
        }
    }
}

/// The raw income stream an income line reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeSource {
    Services,
    Tips,
    Retail,
}

impl IncomeSource {
    pub fn from_line_item(name: &str) -> Option<Self> {
        match name.trim() {
            "Services" => Some(Self::Services),
            "Tips" => Some(Self::Tips),
            "Retail" => Some(Self::Retail),
            _ => None,
        }
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Services => write!(f, "Services"),
            Self::Tips => write!(f, "Tips"),
            Self::Retail => write!(f, "Retail"),
        }
    }
}

/// The three sections of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Income,
    DirectExpenses,
    IndirectExpenses,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[Self::Income, Self::DirectExpenses, Self::IndirectExpenses]
    }

    /// Key used in the table file
    pub fn key(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::DirectExpenses => "direct_expenses",
            Self::IndirectExpenses => "indirect_expenses",
        }
    }

    /// Heading used in reports
    pub fn title(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::DirectExpenses => "Direct expenses",
            Self::IndirectExpenses => "Indirect expenses",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// One row of the percentage table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    /// Free-text grouping, not used in any computation
    #[serde(default)]
    pub category: String,

    /// Display name, unique within its section
    pub line_item: String,

    /// Fraction in [0, 1] of the line's base amount
    pub percent_of_income: f64,

    /// Explicit special rule key; inferred from `line_item` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<LineRule>,

    /// Explicit income source key; inferred from `line_item` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<IncomeSource>,
}

impl BudgetLine {
    /// Create a new line with no explicit keys
    pub fn new(
        category: impl Into<String>,
        line_item: impl Into<String>,
        percent_of_income: f64,
    ) -> Self {
        Self {
            category: category.into(),
            line_item: line_item.into(),
            percent_of_income,
            rule: None,
            source: None,
        }
    }

    /// Attach an explicit special rule key
    pub fn with_rule(mut self, rule: LineRule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Attach an explicit income source key
    pub fn with_source(mut self, source: IncomeSource) -> Self {
        self.source = Some(source);
        self
    }

    /// The special rule for this line, explicit key first
    pub fn rule(&self) -> Option<LineRule> {
        self.rule.or_else(|| LineRule::from_line_item(&self.line_item))
    }

    /// The income source for this line, explicit key first
    pub fn source(&self) -> Option<IncomeSource> {
        self.source
            .or_else(|| IncomeSource::from_line_item(&self.line_item))
    }

    fn validate(&self, section: Section) -> BoothResult<()> {
        if self.line_item.trim().is_empty() {
            return Err(BoothError::Validation(format!(
                "Line item name cannot be empty in {}",
                section.key()
            )));
        }

        if !self.percent_of_income.is_finite()
            || !(0.0..=1.0).contains(&self.percent_of_income)
        {
            return Err(BoothError::Validation(format!(
                "Percent for '{}' in {} must be between 0 and 1 (found {})",
                self.line_item,
                section.key(),
                self.percent_of_income
            )));
        }

        Ok(())
    }
}

/// The full static percentage table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetData {
    #[serde(default)]
    pub income: Vec<BudgetLine>,
    #[serde(default)]
    pub direct_expenses: Vec<BudgetLine>,
    #[serde(default)]
    pub indirect_expenses: Vec<BudgetLine>,
}

impl BudgetData {
    /// Lines of one section, in table order
    pub fn section(&self, section: Section) -> &[BudgetLine] {
        match section {
            Section::Income => &self.income,
            Section::DirectExpenses => &self.direct_expenses,
            Section::IndirectExpenses => &self.indirect_expenses,
        }
    }

    /// Find the first indirect expense line carrying the given rule
    pub fn find_indirect_rule(&self, rule: LineRule) -> Option<&BudgetLine> {
        self.indirect_expenses
            .iter()
            .find(|line| line.rule() == Some(rule))
    }

    /// Find the income line reporting the given source
    pub fn find_income_source(&self, source: IncomeSource) -> Option<&BudgetLine> {
        self.income.iter().find(|line| line.source() == Some(source))
    }

    /// Total number of lines across all sections
    pub fn line_count(&self) -> usize {
        self.income.len() + self.direct_expenses.len() + self.indirect_expenses.len()
    }

    /// Validate the table
    ///
    /// Line items must be unique within each section and every percentage
    /// must be a finite fraction in [0, 1].
    pub fn validate(&self) -> BoothResult<()> {
        for &section in Section::all() {
            let mut seen = HashSet::new();
            for line in self.section(section) {
                line.validate(section)?;
                if !seen.insert(line.line_item.trim()) {
                    return Err(BoothError::duplicate_line_item(
                        section.key(),
                        line.line_item.clone(),
                    ));
                }
            }
        }
        Ok(())
    }
}
