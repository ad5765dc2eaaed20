//! Budget display formatting
//!
//! Renders a projected budget as a terminal table with one amount column per
//! cadence.

use crate::models::{Cadence, CalculatedBudget, ExpenseLine, Money};
use crate::services::BudgetProjection;

const AMOUNT_WIDTH: usize = 14;
const PERCENT_WIDTH: usize = 7;
const MIN_NAME_WIDTH: usize = 28;

/// Format an amount with a currency symbol, thousands separators and 2 decimals
pub fn format_currency(amount: Money, symbol: &str) -> String {
    let digits = amount.dollars().unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{}{}.{:02}", sign, symbol, grouped, amount.cents_part())
}

/// Format a fraction as a percentage with one decimal place
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

struct Layout<'a> {
    cadences: &'a [Cadence],
    symbol: &'a str,
    name_width: usize,
}

impl Layout<'_> {
    fn width(&self) -> usize {
        2 + self.name_width + 1 + PERCENT_WIDTH + self.cadences.len() * (AMOUNT_WIDTH + 1)
    }

    fn row(&self, name: &str, percent: Option<f64>, amounts: &[Money]) -> String {
        let mut line = format!(
            "  {:<width$} {:>pw$}",
            name,
            percent.map(format_percent).unwrap_or_default(),
            width = self.name_width,
            pw = PERCENT_WIDTH
        );
        for amount in amounts {
            line.push_str(&format!(
                " {:>aw$}",
                format_currency(*amount, self.symbol),
                aw = AMOUNT_WIDTH
            ));
        }
        line.push('\n');
        line
    }
}

/// Format a projected budget for terminal display
///
/// `cadences` picks the amount columns, in order.
pub fn format_budget_report(
    projection: &BudgetProjection,
    cadences: &[Cadence],
    symbol: &str,
) -> String {
    let weekly = &projection.weekly;
    let budgets: Vec<&CalculatedBudget> = cadences.iter().map(|c| projection.at(*c)).collect();

    let name_width = weekly
        .income_lines
        .iter()
        .map(|l| l.name.len())
        .chain(weekly.direct_expenses.iter().map(|l| l.name.len()))
        .chain(weekly.indirect_expenses.iter().map(|l| l.name.len()))
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH);

    let layout = Layout {
        cadences,
        symbol,
        name_width,
    };
    let width = layout.width();
    let mut output = String::new();

    // Column headers
    output.push_str(&format!(
        "  {:<width$} {:>pw$}",
        "Line item",
        "%",
        width = name_width,
        pw = PERCENT_WIDTH
    ));
    for cadence in cadences {
        output.push_str(&format!(" {:>aw$}", cadence.label(), aw = AMOUNT_WIDTH));
    }
    output.push('\n');
    output.push_str(&"=".repeat(width));
    output.push('\n');

    // Income
    output.push_str("INCOME\n");
    for (i, line) in weekly.income_lines.iter().enumerate() {
        let amounts: Vec<Money> = budgets.iter().map(|b| b.income_lines[i].amount).collect();
        output.push_str(&layout.row(&line.name, Some(line.percent), &amounts));
    }
    let totals: Vec<Money> = budgets.iter().map(|b| b.total_income).collect();
    output.push_str(&layout.row("Total Income", None, &totals));

    // Expenses
    output.push_str(&format_expense_section(
        &layout,
        "DIRECT EXPENSES",
        "Total Direct Expenses",
        &weekly.direct_expenses,
        &budgets
            .iter()
            .map(|b| (b.direct_expenses.as_slice(), b.totals.direct_expenses))
            .collect::<Vec<_>>(),
    ));
    output.push_str(&format_expense_section(
        &layout,
        "INDIRECT EXPENSES",
        "Total Indirect Expenses",
        &weekly.indirect_expenses,
        &budgets
            .iter()
            .map(|b| (b.indirect_expenses.as_slice(), b.totals.indirect_expenses))
            .collect::<Vec<_>>(),
    ));

    output.push_str(&"-".repeat(width));
    output.push('\n');
    let expenses: Vec<Money> = budgets.iter().map(|b| b.totals.total_expenses).collect();
    output.push_str(&layout.row("Total Expenses", None, &expenses));
    output.push_str(&"=".repeat(width));
    output.push('\n');

    let net: Vec<Money> = budgets.iter().map(|b| b.totals.net_income).collect();
    output.push_str(&layout.row("Savings Bonus", None, &net));

    output
}

fn format_expense_section(
    layout: &Layout<'_>,
    heading: &str,
    total_label: &str,
    weekly_lines: &[ExpenseLine],
    per_cadence: &[(&[ExpenseLine], Money)],
) -> String {
    let mut output = format!("\n{}\n", heading);

    for (i, line) in weekly_lines.iter().enumerate() {
        let amounts: Vec<Money> = per_cadence.iter().map(|(lines, _)| lines[i].amount).collect();
        output.push_str(&layout.row(&line.name, Some(line.percent), &amounts));
        output.push_str(&format!("    % based on: {}\n", line.base));
    }

    let totals: Vec<Money> = per_cadence.iter().map(|(_, total)| *total).collect();
    output.push_str(&layout.row(total_label, None, &totals));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncomeInputs;
    use crate::services::BudgetEngine;
    use crate::storage::default_budget_data;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Money::from_cents(0), "$"), "$0.00");
        assert_eq!(format_currency(Money::from_cents(99_999), "$"), "$999.99");
        assert_eq!(format_currency(Money::from_cents(123_456), "$"), "$1,234.56");
        assert_eq!(format_currency(Money::from_cents(3_198_000), "$"), "$31,980.00");
        assert_eq!(format_currency(Money::from_cents(123_456_789), "£"), "£1,234,567.89");
        assert_eq!(format_currency(Money::from_cents(-150_050), "$"), "-$1,500.50");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.15), "15.0%");
        assert_eq!(format_percent(2.0 / 3.0), "66.7%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn test_format_report_all_cadences() {
        let data = default_budget_data();
        let weekly = BudgetEngine::new(&data).from_income(&IncomeInputs::new(1000.0, 200.0, 300.0));
        let projection = BudgetProjection::from_weekly(&weekly);

        let output = format_budget_report(&projection, Cadence::all(), "$");
        assert!(output.contains("Weekly"));
        assert!(output.contains("Monthly"));
        assert!(output.contains("Annual"));
        assert!(output.contains("Professional Supplies - Backbar"));
        assert!(output.contains("% based on: Services + Tips + Retail"));
        assert!(output.contains("$1,500.00"));
        assert!(output.contains("$31,980.00"));
        assert!(output.contains("Savings Bonus"));
    }

    #[test]
    fn test_format_report_single_cadence() {
        let data = default_budget_data();
        let weekly = BudgetEngine::new(&data).from_income(&IncomeInputs::new(1000.0, 200.0, 300.0));
        let projection = BudgetProjection::from_weekly(&weekly);

        let output = format_budget_report(&projection, &[Cadence::Monthly], "$");
        assert!(output.contains("Monthly"));
        assert!(!output.contains("Annual"));
        assert!(output.contains("$2,665.00"));
    }
}
