//! Budget calculation engine
//!
//! Turns caller inputs plus the static percentage table into an itemized
//! weekly budget. Both entry modes reduce to an [`IncomeBasis`] and share one
//! routine for expense lines and totals.

use tracing::{debug, warn};

use crate::error::{BoothError, BoothResult};
use crate::models::{
    BaseAmount, BudgetData, BudgetLine, BudgetTotals, CalculatedBudget, ExpenseLine, IncomeInputs,
    IncomeLine, IncomeSource, LineRule, Money, RentTarget, Section,
};

/// Share of service revenue spent on back-bar supplies
pub const BACKBAR_SUPPLY_RATE: f64 = 0.15;

/// Share of retail revenue spent on the goods sold
pub const RETAIL_COGS_RATE: f64 = 0.5;

/// Rent percentage older tables assumed when they had no Rent Expense line
pub const LEGACY_RENT_PERCENT: f64 = 0.09;

/// What to do when the table has no Rent Expense line
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RentPolicy {
    /// Fail with a configuration error
    #[default]
    Strict,
    /// Use the given percentage when the line is missing. A line that is
    /// present with a non-positive percentage is still an error.
    LegacyFallback(f64),
}

/// Weekly income figures every expense line is measured against
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IncomeBasis {
    pub total_income: f64,
    pub services: f64,
    pub tips: f64,
    pub retail: f64,
}

impl IncomeBasis {
    pub fn services_and_tips(&self) -> f64 {
        self.services + self.tips
    }

    /// The value of a base amount
    pub fn amount_of(&self, base: BaseAmount) -> f64 {
        match base {
            BaseAmount::Services => self.services,
            BaseAmount::Retail => self.retail,
            BaseAmount::ServicesAndTips => self.services_and_tips(),
            BaseAmount::TotalIncome => self.total_income,
        }
    }
}

fn fraction_of(amount: f64, base: f64) -> f64 {
    if base > 0.0 {
        amount / base
    } else {
        0.0
    }
}

/// Calculation engine over a borrowed, read-only percentage table
#[derive(Debug, Clone, Copy)]
pub struct BudgetEngine<'a> {
    data: &'a BudgetData,
    rent_policy: RentPolicy,
}

impl<'a> BudgetEngine<'a> {
    /// Create a new engine with the strict rent policy
    pub fn new(data: &'a BudgetData) -> Self {
        Self {
            data,
            rent_policy: RentPolicy::Strict,
        }
    }

    /// Set the policy for tables without a Rent Expense line
    pub fn with_rent_policy(mut self, rent_policy: RentPolicy) -> Self {
        self.rent_policy = rent_policy;
        self
    }

    /// Build a weekly budget from actual income amounts
    pub fn from_income(&self, inputs: &IncomeInputs) -> CalculatedBudget {
        let basis = IncomeBasis {
            total_income: inputs.total(),
            services: inputs.services,
            tips: inputs.tips,
            retail: inputs.retail,
        };
        debug!(total_income = basis.total_income, "building budget from income");

        let income_lines = self
            .data
            .income
            .iter()
            .map(|line| {
                let amount = match line.source() {
                    Some(IncomeSource::Services) => inputs.services,
                    Some(IncomeSource::Tips) => inputs.tips,
                    Some(IncomeSource::Retail) => inputs.retail,
                    None => {
                        warn!(line_item = %line.line_item, "income line has no matching source");
                        0.0
                    }
                };
                IncomeLine {
                    name: line.line_item.clone(),
                    amount: Money::from_amount(amount),
                    percent: fraction_of(amount, basis.total_income),
                }
            })
            .collect();

        self.build(&basis, income_lines)
    }

    /// Build a weekly budget that supports a given rent
    ///
    /// Total income is the rent divided by the table's rent percentage, then
    /// split across income lines by their table percentages.
    pub fn from_rent(&self, target: &RentTarget) -> BoothResult<CalculatedBudget> {
        let rent_percent = self.rent_percent()?;
        Ok(self.from_rent_at(target, rent_percent))
    }

    /// Build a weekly budget from rent using an already resolved rent percentage
    ///
    /// `rent_percent` must be positive; callers get it from [`Self::rent_percent`].
    pub fn from_rent_at(&self, target: &RentTarget, rent_percent: f64) -> CalculatedBudget {
        let total_income = target.amount / rent_percent;
        debug!(rent = target.amount, rent_percent, total_income, "building budget from rent");

        let income_lines = self
            .data
            .income
            .iter()
            .map(|line| IncomeLine {
                name: line.line_item.clone(),
                amount: Money::from_amount(total_income * line.percent_of_income),
                percent: line.percent_of_income,
            })
            .collect();

        let share = |source| {
            self.data
                .find_income_source(source)
                .map(|line| line.percent_of_income)
                .unwrap_or(0.0)
        };
        let basis = IncomeBasis {
            total_income,
            services: total_income * share(IncomeSource::Services),
            tips: total_income * share(IncomeSource::Tips),
            retail: total_income * share(IncomeSource::Retail),
        };

        self.build(&basis, income_lines)
    }

    /// The Rent Expense percentage used for rent-based derivation
    pub fn rent_percent(&self) -> BoothResult<f64> {
        match self.data.find_indirect_rule(LineRule::RentExpense) {
            Some(line) if line.percent_of_income > 0.0 => Ok(line.percent_of_income),
            Some(line) => Err(BoothError::invalid_rent_percent(Some(line.percent_of_income))),
            None => match self.rent_policy {
                RentPolicy::LegacyFallback(p) if p > 0.0 => {
                    warn!(percent = p, "no Rent Expense line, using fallback percentage");
                    Ok(p)
                }
                _ => Err(BoothError::invalid_rent_percent(None)),
            },
        }
    }

    fn build(&self, basis: &IncomeBasis, income_lines: Vec<IncomeLine>) -> CalculatedBudget {
        let direct_expenses = self.expense_lines(Section::DirectExpenses, basis);
        let indirect_expenses = self.expense_lines(Section::IndirectExpenses, basis);

        let direct_total: Money = direct_expenses.iter().map(|l| l.amount).sum();
        let indirect_total: Money = indirect_expenses.iter().map(|l| l.amount).sum();
        let total_expenses = direct_total + indirect_total;
        let total_income = Money::from_amount(basis.total_income);
        // Whole cents: net == total_income - total_expenses exactly
        let net_income = total_income - total_expenses;

        CalculatedBudget {
            total_income,
            income_lines,
            direct_expenses,
            indirect_expenses,
            totals: BudgetTotals {
                direct_expenses: direct_total,
                indirect_expenses: indirect_total,
                total_expenses,
                net_income,
            },
        }
    }

    fn expense_lines(&self, section: Section, basis: &IncomeBasis) -> Vec<ExpenseLine> {
        self.data
            .section(section)
            .iter()
            .map(|line| expense_line(line, section, basis))
            .collect()
    }
}

/// Resolve the base and rate for one expense line
///
/// Overrides only apply in the section they belong to; anywhere else the line
/// falls back to its table percentage of Services + Tips.
fn base_and_rate(line: &BudgetLine, section: Section) -> (BaseAmount, f64) {
    match (section, line.rule()) {
        (Section::DirectExpenses, Some(LineRule::BackbarSupplies)) => {
            (BaseAmount::Services, BACKBAR_SUPPLY_RATE)
        }
        (Section::DirectExpenses, Some(LineRule::RetailCostOfGoods)) => {
            (BaseAmount::Retail, RETAIL_COGS_RATE)
        }
        (Section::IndirectExpenses, Some(LineRule::MerchantFees)) => {
            (BaseAmount::TotalIncome, line.percent_of_income)
        }
        _ => (BaseAmount::ServicesAndTips, line.percent_of_income),
    }
}

fn expense_line(line: &BudgetLine, section: Section, basis: &IncomeBasis) -> ExpenseLine {
    let (base, rate) = base_and_rate(line, section);
    let base_value = basis.amount_of(base);
    let amount = Money::from_amount(base_value * rate);

    ExpenseLine {
        name: line.line_item.clone(),
        amount,
        percent: fraction_of(amount.to_f64(), base_value),
        base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::default_budget_data;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_from_income_example() {
        let data = default_budget_data();
        let engine = BudgetEngine::new(&data);
        let budget = engine.from_income(&IncomeInputs::new(1000.0, 200.0, 300.0));

        assert_eq!(budget.total_income.cents(), 150_000);

        let backbar = budget.expense_line("Professional Supplies - Backbar").unwrap();
        assert_eq!(backbar.amount.cents(), 15_000);
        assert_eq!(backbar.base, BaseAmount::Services);
        assert!(approx(backbar.percent, 0.15));

        let cogs = budget.expense_line("Retail Cost of Goods Sold").unwrap();
        assert_eq!(cogs.amount.cents(), 15_000);
        assert_eq!(cogs.base, BaseAmount::Retail);
        assert!(approx(cogs.percent, 0.5));

        let fees = budget.expense_line("Bank Charges & Merchant Fees").unwrap();
        assert_eq!(fees.amount.cents(), 4_500);
        assert_eq!(fees.base, BaseAmount::TotalIncome);

        let rent = budget.expense_line("Rent Expense").unwrap();
        assert_eq!(rent.amount.cents(), 10_800);
        assert_eq!(rent.base, BaseAmount::ServicesAndTips);
        assert!(approx(rent.percent, 0.09));

        assert_eq!(budget.totals.direct_expenses.cents(), 34_800);
        assert_eq!(budget.totals.indirect_expenses.cents(), 53_700);
        assert_eq!(budget.totals.total_expenses.cents(), 88_500);
        assert_eq!(budget.totals.net_income.cents(), 61_500);
    }

    #[test]
    fn test_income_line_percents() {
        let data = default_budget_data();
        let budget = BudgetEngine::new(&data).from_income(&IncomeInputs::new(1000.0, 200.0, 300.0));

        let services = budget.income_line("Services").unwrap();
        assert_eq!(services.amount.cents(), 100_000);
        assert!(approx(services.percent, 1000.0 / 1500.0));

        let retail = budget.income_line("Retail").unwrap();
        assert!(approx(retail.percent, 0.2));
    }

    #[test]
    fn test_from_income_all_zero() {
        let data = default_budget_data();
        let budget = BudgetEngine::new(&data).from_income(&IncomeInputs::default());

        assert!(budget.total_income.is_zero());
        assert!(budget.totals.net_income.is_zero());
        for line in &budget.income_lines {
            assert_eq!(line.percent, 0.0);
        }
        for line in budget.direct_expenses.iter().chain(&budget.indirect_expenses) {
            assert!(line.amount.is_zero());
            assert_eq!(line.percent, 0.0);
        }
    }

    #[test]
    fn test_unmatched_income_line_is_zero() {
        let data = BudgetData {
            income: vec![
                BudgetLine::new("Income", "Services", 0.9),
                BudgetLine::new("Income", "Gift Cards", 0.1),
            ],
            ..Default::default()
        };
        let budget = BudgetEngine::new(&data).from_income(&IncomeInputs::new(500.0, 0.0, 0.0));
        let gift = budget.income_line("Gift Cards").unwrap();
        assert!(gift.amount.is_zero());
        assert_eq!(gift.percent, 0.0);
        assert_eq!(budget.total_income.cents(), 50_000);
    }

    #[test]
    fn test_zero_retail_base_reports_zero_percent() {
        let data = default_budget_data();
        let budget = BudgetEngine::new(&data).from_income(&IncomeInputs::new(800.0, 100.0, 0.0));
        let cogs = budget.expense_line("Retail Cost of Goods Sold").unwrap();
        assert!(cogs.amount.is_zero());
        assert_eq!(cogs.percent, 0.0);
    }

    #[test]
    fn test_override_only_applies_in_its_section() {
        let data = BudgetData {
            income: vec![BudgetLine::new("Income", "Services", 1.0)],
            direct_expenses: vec![BudgetLine::new("Fees", "Bank Charges & Merchant Fees", 0.1)],
            indirect_expenses: vec![BudgetLine::new("Supplies", "Professional Supplies - Backbar", 0.1)],
        };
        let budget = BudgetEngine::new(&data).from_income(&IncomeInputs::new(100.0, 0.0, 0.0));
        for line in budget.direct_expenses.iter().chain(&budget.indirect_expenses) {
            assert_eq!(line.base, BaseAmount::ServicesAndTips);
            assert_eq!(line.amount.cents(), 1_000);
        }
    }

    #[test]
    fn test_explicit_rule_key_drives_override() {
        let data = BudgetData {
            income: vec![BudgetLine::new("Income", "Services", 1.0)],
            direct_expenses: vec![BudgetLine::new("Supplies", "Color & Backbar", 0.02)
                .with_rule(LineRule::BackbarSupplies)],
            ..Default::default()
        };
        let budget = BudgetEngine::new(&data).from_income(&IncomeInputs::new(200.0, 50.0, 0.0));
        let line = &budget.direct_expenses[0];
        assert_eq!(line.base, BaseAmount::Services);
        assert_eq!(line.amount.cents(), 3_000);
    }

    #[test]
    fn test_from_rent_example() {
        let data = default_budget_data();
        let engine = BudgetEngine::new(&data);
        let budget = engine.from_rent(&RentTarget::new(900.0)).unwrap();

        assert_eq!(budget.total_income.cents(), 1_000_000);
        assert_eq!(budget.income_line("Services").unwrap().amount.cents(), 800_000);
        assert_eq!(budget.income_line("Tips").unwrap().amount.cents(), 100_000);
        assert_eq!(budget.income_line("Retail").unwrap().amount.cents(), 100_000);
        assert_eq!(budget.income_line("Services").unwrap().percent, 0.8);

        assert_eq!(
            budget.expense_line("Professional Supplies - Backbar").unwrap().amount.cents(),
            120_000
        );
        assert_eq!(budget.expense_line("Retail Cost of Goods Sold").unwrap().amount.cents(), 50_000);
        assert_eq!(budget.expense_line("Rent Expense").unwrap().amount.cents(), 81_000);
        assert_eq!(
            budget.expense_line("Bank Charges & Merchant Fees").unwrap().amount.cents(),
            30_000
        );

        assert_eq!(budget.totals.direct_expenses.cents(), 206_000);
        assert_eq!(budget.totals.indirect_expenses.cents(), 399_000);
        assert_eq!(budget.totals.net_income.cents(), 395_000);
    }

    #[test]
    fn test_rent_line_round_trips_without_retail() {
        let data = BudgetData {
            income: vec![
                BudgetLine::new("Income", "Services", 0.9),
                BudgetLine::new("Income", "Tips", 0.1),
            ],
            direct_expenses: vec![],
            indirect_expenses: vec![BudgetLine::new("Occupancy", "Rent Expense", 0.12)],
        };
        let budget = BudgetEngine::new(&data)
            .from_rent(&RentTarget::new(0.12 * 2500.0))
            .unwrap();
        assert_eq!(budget.total_income.cents(), 250_000);
        assert_eq!(budget.expense_line("Rent Expense").unwrap().amount.cents(), 30_000);
    }

    #[test]
    fn test_missing_rent_line_is_config_error() {
        let data = BudgetData {
            income: vec![BudgetLine::new("Income", "Services", 1.0)],
            ..Default::default()
        };
        let err = BudgetEngine::new(&data)
            .from_rent(&RentTarget::new(900.0))
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_zero_rent_percent_is_config_error_even_with_fallback() {
        let data = BudgetData {
            indirect_expenses: vec![BudgetLine::new("Occupancy", "Rent Expense", 0.0)],
            ..Default::default()
        };
        let engine =
            BudgetEngine::new(&data).with_rent_policy(RentPolicy::LegacyFallback(LEGACY_RENT_PERCENT));
        assert!(engine.from_rent(&RentTarget::new(900.0)).unwrap_err().is_config());
    }

    #[test]
    fn test_legacy_fallback_for_missing_rent_line() {
        let data = BudgetData {
            income: vec![BudgetLine::new("Income", "Services", 1.0)],
            ..Default::default()
        };
        let engine =
            BudgetEngine::new(&data).with_rent_policy(RentPolicy::LegacyFallback(LEGACY_RENT_PERCENT));
        let budget = engine.from_rent(&RentTarget::new(900.0)).unwrap();
        assert_eq!(budget.total_income.cents(), 1_000_000);
    }

    #[test]
    fn test_both_modes_share_shape() {
        let data = default_budget_data();
        let engine = BudgetEngine::new(&data);
        let by_income = engine.from_income(&IncomeInputs::new(800.0, 100.0, 100.0));
        let by_rent = engine.from_rent(&RentTarget::new(90.0)).unwrap();

        let names = |b: &CalculatedBudget| {
            b.direct_expenses
                .iter()
                .chain(&b.indirect_expenses)
                .map(|l| (l.name.clone(), l.base))
                .collect::<Vec<_>>()
        };
        assert_eq!(names(&by_income), names(&by_rent));
        assert_eq!(by_income.totals, by_rent.totals);
    }

    #[test]
    fn test_sub_cent_income_reconciles() {
        let data = default_budget_data();
        let budget = BudgetEngine::new(&data).from_income(&IncomeInputs::new(2.135, 0.0, 0.0));

        assert_eq!(budget.total_income.cents(), 213);
        assert_eq!(budget.totals.total_expenses.cents(), 133);
        assert_eq!(budget.totals.net_income.cents(), 80);
    }

    #[test]
    fn test_from_rent_at_matches_from_rent() {
        let data = default_budget_data();
        let engine =
            BudgetEngine::new(&data).with_rent_policy(RentPolicy::LegacyFallback(LEGACY_RENT_PERCENT));
        let target = RentTarget::new(900.0);
        let rent_percent = engine.rent_percent().unwrap();
        assert_eq!(
            engine.from_rent_at(&target, rent_percent),
            engine.from_rent(&target).unwrap()
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn cents() -> impl Strategy<Value = f64> {
            (0u32..10_000_000).prop_map(|c| c as f64 / 100.0)
        }

        fn sub_cents() -> impl Strategy<Value = f64> {
            (0u32..10_000_000).prop_map(|m| m as f64 / 1000.0)
        }

        proptest! {
            #[test]
            fn net_income_is_total_minus_expenses(s in cents(), t in cents(), r in cents()) {
                let data = default_budget_data();
                let budget = BudgetEngine::new(&data).from_income(&IncomeInputs::new(s, t, r));
                prop_assert_eq!(
                    budget.totals.net_income,
                    budget.total_income - budget.totals.total_expenses
                );
            }

            #[test]
            fn net_income_reconciles_for_sub_cent_inputs(s in sub_cents(), t in sub_cents(), r in sub_cents()) {
                let data = default_budget_data();
                let budget = BudgetEngine::new(&data).from_income(&IncomeInputs::new(s, t, r));
                prop_assert_eq!(
                    budget.totals.net_income,
                    budget.total_income - budget.totals.total_expenses
                );
            }

            #[test]
            fn rent_net_income_reconciles(x in sub_cents()) {
                let data = default_budget_data();
                let budget = BudgetEngine::new(&data).from_rent(&RentTarget::new(x)).unwrap();
                prop_assert_eq!(
                    budget.totals.net_income,
                    budget.total_income - budget.totals.total_expenses
                );
            }

            #[test]
            fn subtotals_are_sums_of_rounded_lines(s in cents(), t in cents(), r in cents()) {
                let data = default_budget_data();
                let budget = BudgetEngine::new(&data).from_income(&IncomeInputs::new(s, t, r));
                let direct: Money = budget.direct_expenses.iter().map(|l| l.amount).sum();
                let indirect: Money = budget.indirect_expenses.iter().map(|l| l.amount).sum();
                prop_assert_eq!(budget.totals.direct_expenses, direct);
                prop_assert_eq!(budget.totals.indirect_expenses, indirect);
                prop_assert_eq!(budget.totals.total_expenses, direct + indirect);
            }

            #[test]
            fn income_lines_sum_to_total(s in cents(), t in cents(), r in cents()) {
                let data = default_budget_data();
                let budget = BudgetEngine::new(&data).from_income(&IncomeInputs::new(s, t, r));
                let sum: Money = budget.income_lines.iter().map(|l| l.amount).sum();
                prop_assert!((sum.cents() - budget.total_income.cents()).abs() <= 1);
            }

            #[test]
            fn from_income_is_idempotent(s in cents(), t in cents(), r in cents()) {
                let data = default_budget_data();
                let engine = BudgetEngine::new(&data);
                let inputs = IncomeInputs::new(s, t, r);
                prop_assert_eq!(engine.from_income(&inputs), engine.from_income(&inputs));
            }

            #[test]
            fn rent_target_recovers_total_income(x in cents()) {
                let data = default_budget_data();
                let engine = BudgetEngine::new(&data);
                let p = engine.rent_percent().unwrap();
                let budget = engine.from_rent(&RentTarget::new(p * x)).unwrap();
                let expected = Money::from_amount(x);
                prop_assert!((budget.total_income.cents() - expected.cents()).abs() <= 1);
            }
        }
    }
}
