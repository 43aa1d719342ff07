//! Statistics formatting
//!
//! Renders grand totals and per-category breakdowns with percentages.

use crate::ledger::Ledger;

use super::expense::format_expense_list;

/// Format the overall statistics: grand total plus every category's total
/// and share of spending, in category-set order
pub fn format_statistics(ledger: &Ledger) -> String {
    let mut output = String::new();
    output.push_str(&format!("Total spent: {:.2}\n", ledger.total()));
    output.push('\n');

    let totals = ledger.totals_by_category();
    let name_width = totals
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(8)
        .max(8);

    for (category, sum) in totals {
        let pct = ledger.percentage(&category);
        output.push_str(&format!(
            "{:<width$}  {:>10.2}  ({:>6.2}%)\n",
            category,
            sum,
            pct,
            width = name_width
        ));
    }

    output
}

/// Format one category's statistics: total, share, and its records
pub fn format_category_stats(ledger: &Ledger, category: &str) -> String {
    let total: f64 = ledger
        .totals_by_category()
        .into_iter()
        .find(|(name, _)| name == category)
        .map(|(_, sum)| sum)
        .unwrap_or(0.0);

    let mut output = String::new();
    output.push_str(&format!("Category: {}\n", category));
    output.push_str(&format!("Spent:    {:.2}\n", total));
    output.push_str(&format!("Percent:  {:.2}%\n", ledger.percentage(category)));
    output.push('\n');
    output.push_str(&format_expense_list(&ledger.by_category(category)));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use chrono::NaiveDate;

    fn populated_ledger() -> Ledger {
        let ledger = Ledger::new();
        ledger
            .add(Expense::with_description(
                50.0,
                "Food",
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                "lunch",
            ))
            .unwrap();
        ledger
            .add(Expense::new(
                150.0,
                "Food",
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            ))
            .unwrap();
        ledger
    }

    #[test]
    fn test_statistics_lists_every_category() {
        let output = format_statistics(&populated_ledger());
        assert!(output.contains("Total spent: 200.00"));
        assert!(output.contains("Food"));
        assert!(output.contains("100.00%"));
        assert!(output.contains("Miscellaneous"));
    }

    #[test]
    fn test_category_stats() {
        let output = format_category_stats(&populated_ledger(), "Food");
        assert!(output.contains("Category: Food"));
        assert!(output.contains("Spent:    200.00"));
        assert!(output.contains("Percent:  100.00%"));
        assert!(output.contains("lunch"));
    }

    #[test]
    fn test_category_stats_for_empty_category() {
        let output = format_category_stats(&populated_ledger(), "Transport");
        assert!(output.contains("Spent:    0.00"));
        assert!(output.contains("Percent:  0.00%"));
        assert!(output.contains("No expenses found."));
    }
}
