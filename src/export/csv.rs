//! CSV export functionality
//!
//! One row per line item with its amount at every cadence, followed by the
//! subtotal rows. Amounts are plain decimals without currency symbols.

use std::io::Write;

use crate::error::{BoothError, BoothResult};
use crate::models::{Cadence, Money, Section};
use crate::services::BudgetProjection;

fn decimal(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, amount.dollars().abs(), amount.cents_part())
}

/// Export a projected budget to CSV
pub fn export_csv<W: Write>(projection: &BudgetProjection, writer: W) -> BoothResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    let cadences = Cadence::all();

    let mut header = vec![
        "Section".to_string(),
        "Line Item".to_string(),
        "Based On".to_string(),
        "Percent".to_string(),
    ];
    header.extend(cadences.iter().map(|c| c.label().to_string()));
    csv.write_record(&header)?;

    let weekly = &projection.weekly;

    for (i, line) in weekly.income_lines.iter().enumerate() {
        let mut record = vec![
            Section::Income.title().to_string(),
            line.name.clone(),
            String::new(),
            format!("{:.4}", line.percent),
        ];
        record.extend(
            cadences
                .iter()
                .map(|c| decimal(projection.at(*c).income_lines[i].amount)),
        );
        csv.write_record(&record)?;
    }

    for section in [Section::DirectExpenses, Section::IndirectExpenses] {
        let lines = match section {
            Section::DirectExpenses => &weekly.direct_expenses,
            _ => &weekly.indirect_expenses,
        };
        for (i, line) in lines.iter().enumerate() {
            let mut record = vec![
                section.title().to_string(),
                line.name.clone(),
                line.base.label().to_string(),
                format!("{:.4}", line.percent),
            ];
            record.extend(cadences.iter().map(|c| {
                let budget = projection.at(*c);
                let scaled = match section {
                    Section::DirectExpenses => &budget.direct_expenses,
                    _ => &budget.indirect_expenses,
                };
                decimal(scaled[i].amount)
            }));
            csv.write_record(&record)?;
        }
    }

    let totals: [(&str, fn(&crate::models::CalculatedBudget) -> Money); 5] = [
        ("Total Income", |b| b.total_income),
        ("Total Direct Expenses", |b| b.totals.direct_expenses),
        ("Total Indirect Expenses", |b| b.totals.indirect_expenses),
        ("Total Expenses", |b| b.totals.total_expenses),
        ("Savings Bonus", |b| b.totals.net_income),
    ];
    for (label, field) in totals {
        let mut record = vec![
            "Totals".to_string(),
            label.to_string(),
            String::new(),
            String::new(),
        ];
        record.extend(cadences.iter().map(|c| decimal(field(projection.at(*c)))));
        csv.write_record(&record)?;
    }

    csv.flush().map_err(|e| BoothError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncomeInputs;
    use crate::services::BudgetEngine;
    use crate::storage::default_budget_data;

    fn export() -> String {
        let data = default_budget_data();
        let weekly = BudgetEngine::new(&data).from_income(&IncomeInputs::new(1000.0, 200.0, 300.0));
        let mut output = Vec::new();
        export_csv(&BudgetProjection::from_weekly(&weekly), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = export();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Section,Line Item,Based On,Percent,Weekly,Monthly,Annual"
        );
        assert!(csv.contains("Direct expenses,Professional Supplies - Backbar,Services,0.1500,150.00,650.00,7800.00"));
        assert!(csv.contains("Totals,Savings Bonus,,,615.00,2665.00,31980.00"));
    }

    #[test]
    fn test_csv_quotes_names_with_commas() {
        let csv = export();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        let data = default_budget_data();
        assert_eq!(rows.len(), data.line_count() + 5);
        assert!(rows.iter().all(|r| r.len() == 7));
    }

    #[test]
    fn test_decimal_format() {
        assert_eq!(decimal(Money::from_cents(5)), "0.05");
        assert_eq!(decimal(Money::from_cents(-1050)), "-10.50");
    }
}
