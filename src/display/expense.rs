//! Expense list formatting

use crate::models::Expense;

/// Format a list of expenses as an aligned table
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let category_width = expenses
        .iter()
        .map(|e| e.category.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<width$}  {:>10}  {}\n",
        "Date",
        "Category",
        "Amount",
        "Description",
        width = category_width
    ));
    output.push_str(&format!(
        "{:-<10}  {:-<width$}  {:->10}  {:-<11}\n",
        "",
        "",
        "",
        "",
        width = category_width
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<10}  {:<width$}  {:>10.2}  {}\n",
            expense.date.format("%Y-%m-%d").to_string(),
            expense.category,
            expense.amount,
            expense.description,
            width = category_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_list_message() {
        assert_eq!(format_expense_list(&[]), "No expenses found.");
    }

    #[test]
    fn test_table_contains_rows() {
        let expenses = vec![Expense::with_description(
            50.0,
            "Food",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "lunch",
        )];

        let table = format_expense_list(&expenses);
        assert!(table.contains("Date"));
        assert!(table.contains("2024-01-01"));
        assert!(table.contains("50.00"));
        assert!(table.contains("lunch"));
    }
}
