//! Line codec for the ledger file
//!
//! One record per line, fields joined by `;` in fixed order:
//!
//! ```text
//! date;category;amount;description
//! ```
//!
//! Literal `;` inside the description is escaped as `\;` on encode and
//! restored on decode. Date and category never contain `;`; the amount is
//! the verbatim numeric rendering. Escaping is deliberately asymmetric:
//! decode splits off the first three fields and treats everything after the
//! third `;` as the description, so only the description field is ever
//! unescaped. Extending escaping to other fields would be a format version
//! bump.
//!
//! Decode never fails on content: malformed lines (fewer than four fields,
//! unparseable date or amount) are skipped, counted, and logged. Category
//! membership and amount positivity are not checked here; that validation
//! belongs to [`Ledger::add`](crate::ledger::Ledger::add).

use chrono::NaiveDate;
use tracing::warn;

use crate::models::Expense;

/// Outcome of decoding file content
#[derive(Debug, Default)]
pub struct DecodeReport {
    /// Records parsed from well-formed lines, in file order
    pub expenses: Vec<Expense>,
    /// Number of malformed lines that were skipped
    pub skipped: usize,
}

/// Encode records into the persisted text format
///
/// One newline-terminated line per record; an empty slice yields an empty
/// string.
pub fn encode(expenses: &[Expense]) -> String {
    let mut out = String::new();
    for expense in expenses {
        out.push_str(&format!(
            "{};{};{};{}\n",
            expense.date.format("%Y-%m-%d"),
            expense.category,
            expense.amount,
            escape_description(&expense.description),
        ));
    }
    out
}

/// Decode file content into records, skipping malformed lines
pub fn decode(content: &str) -> DecodeReport {
    let mut report = DecodeReport::default();

    for (idx, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(expense) => report.expenses.push(expense),
            None => {
                warn!(line = idx + 1, content = line, "skipping malformed line");
                report.skipped += 1;
            }
        }
    }

    report
}

fn parse_line(line: &str) -> Option<Expense> {
    let mut fields = line.splitn(4, ';');

    let date = fields.next()?;
    let category = fields.next()?;
    let amount = fields.next()?;
    let description = fields.next()?;

    let date: NaiveDate = date.parse().ok()?;
    let amount: f64 = amount.parse().ok()?;

    Some(Expense::with_description(
        amount,
        category,
        date,
        unescape_description(description),
    ))
}

fn escape_description(description: &str) -> String {
    description.replace(';', "\\;")
}

fn unescape_description(description: &str) -> String {
    description.replace("\\;", ";")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_encode_empty_is_empty() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_encode_one_line_per_record() {
        let records = vec![
            Expense::with_description(50.0, "Food", date(2024, 1, 1), "lunch"),
            Expense::new(150.0, "Food", date(2024, 1, 2)),
        ];

        assert_eq!(
            encode(&records),
            "2024-01-01;Food;50;lunch\n2024-01-02;Food;150;\n"
        );
    }

    #[test]
    fn test_encode_escapes_description_delimiter() {
        let records = vec![Expense::with_description(
            9.5,
            "Food",
            date(2024, 1, 1),
            "a;b",
        )];
        assert_eq!(encode(&records), "2024-01-01;Food;9.5;a\\;b\n");
    }

    #[test]
    fn test_decode_round_trip() {
        let records = vec![
            Expense::with_description(50.0, "Food", date(2024, 1, 1), "lunch"),
            Expense::new(150.0, "Food", date(2024, 1, 2)),
            Expense::with_description(3.25, "Gifts", date(2024, 2, 29), "semi;colons;here"),
        ];

        let report = decode(&encode(&records));
        assert_eq!(report.skipped, 0);
        assert_eq!(report.expenses, records);
    }

    #[test]
    fn test_decode_skips_short_lines() {
        let content = "2024-01-01;Food;50;ok\n2024-01-02;Food\n";
        let report = decode(content);

        assert_eq!(report.expenses.len(), 1);
        assert_eq!(report.expenses[0].description, "ok");
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_decode_skips_bad_date_and_amount() {
        let content = "\
not-a-date;Food;50;x
2024-01-01;Food;lots;x
2024-01-01;Food;50;kept
";
        let report = decode(content);
        assert_eq!(report.expenses.len(), 1);
        assert_eq!(report.expenses[0].description, "kept");
        assert_eq!(report.skipped, 2);
    }

    #[test]
    fn test_decode_ignores_empty_lines() {
        let content = "\n2024-01-01;Food;50;x\n\n";
        let report = decode(content);
        assert_eq!(report.expenses.len(), 1);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_decode_does_not_validate_semantics() {
        // Negative amounts and unknown categories parse fine here; the
        // ledger rejects them at add time.
        let report = decode("2024-01-01;Yachts;-5;x\n");
        assert_eq!(report.skipped, 0);
        assert_eq!(report.expenses[0].amount, -5.0);
        assert_eq!(report.expenses[0].category, "Yachts");
    }

    #[test]
    fn test_decode_keeps_description_semicolons() {
        let report = decode("2024-01-01;Food;1;a\\;b\\;c\n");
        assert_eq!(report.expenses[0].description, "a;b;c");
    }
}
