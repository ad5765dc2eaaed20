//! Percentage table display formatting

use super::budget::format_percent;
use crate::models::{BudgetData, BudgetLine, LineRule, Section};
use crate::services::budget::{BACKBAR_SUPPLY_RATE, RETAIL_COGS_RATE};

fn rule_note(line: &BudgetLine, section: Section) -> String {
    match (section, line.rule()) {
        (Section::DirectExpenses, Some(LineRule::BackbarSupplies)) => {
            format!("fixed {} of Services", format_percent(BACKBAR_SUPPLY_RATE))
        }
        (Section::DirectExpenses, Some(LineRule::RetailCostOfGoods)) => {
            format!("fixed {} of Retail", format_percent(RETAIL_COGS_RATE))
        }
        (Section::IndirectExpenses, Some(LineRule::MerchantFees)) => {
            "of Services + Tips + Retail".to_string()
        }
        (Section::IndirectExpenses, Some(LineRule::RentExpense)) => {
            "of Services + Tips (rent anchor)".to_string()
        }
        (Section::Income, _) => match line.source() {
            Some(source) => format!("{} income", source),
            None => "no matching income".to_string(),
        },
        _ => "of Services + Tips".to_string(),
    }
}

/// Format the percentage table grouped by section
pub fn format_percentage_table(data: &BudgetData) -> String {
    let name_width = Section::all()
        .iter()
        .flat_map(|s| data.section(*s).iter().map(|l| l.line_item.len()))
        .max()
        .unwrap_or(9)
        .max(9);
    let category_width = Section::all()
        .iter()
        .flat_map(|s| data.section(*s).iter().map(|l| l.category.len()))
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();

    for (i, section) in Section::all().iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", section.title().to_uppercase()));

        let lines = data.section(*section);
        if lines.is_empty() {
            output.push_str("  (no lines)\n");
            continue;
        }

        for line in lines {
            output.push_str(&format!(
                "  {:<nw$}  {:<cw$}  {:>7}  {}\n",
                line.line_item,
                line.category,
                format_percent(line.percent_of_income),
                rule_note(line, *section),
                nw = name_width,
                cw = category_width
            ));
        }
    }

    output
}
