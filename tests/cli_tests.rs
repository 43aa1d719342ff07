use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "outlay";

fn outlay_command(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("OUTLAY_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn cli_runs_without_arguments() {
    let dir = TempDir::new().unwrap();
    outlay_command(&dir)
        .assert()
        .success()
        .stdout(contains("outlay --help"));
}

#[test]
fn cli_add_then_list_round_trips_through_the_ledger_file() {
    let dir = TempDir::new().unwrap();

    outlay_command(&dir)
        .args([
            "add",
            "50",
            "Food",
            "--date",
            "2024-01-01",
            "--description",
            "lunch; with a friend",
        ])
        .assert()
        .success()
        .stdout(contains("Expense added"));

    // A second process sees the persisted record, escaping intact.
    outlay_command(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("2024-01-01"))
        .stdout(contains("lunch; with a friend"));
}

#[test]
fn cli_add_rejects_non_positive_amount() {
    let dir = TempDir::new().unwrap();

    outlay_command(&dir)
        .args(["add", "0", "Food", "--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("amount must be positive"));
}

#[test]
fn cli_add_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();

    outlay_command(&dir)
        .args(["add", "10", "Yachts", "--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("unknown category"));
}

#[test]
fn cli_stats_reports_totals_and_percentages() {
    let dir = TempDir::new().unwrap();

    outlay_command(&dir)
        .args(["add", "50", "Food", "--date", "2024-01-01"])
        .assert()
        .success();
    outlay_command(&dir)
        .args(["add", "150", "Food", "--date", "2024-01-02"])
        .assert()
        .success();

    outlay_command(&dir)
        .args(["stats"])
        .assert()
        .success()
        .stdout(contains("Total spent: 200.00"))
        .stdout(contains("100.00%"));

    outlay_command(&dir)
        .args(["stats", "Transport"])
        .assert()
        .success()
        .stdout(contains("Percent:  0.00%"));
}

#[test]
fn cli_list_filters_by_category_and_date() {
    let dir = TempDir::new().unwrap();

    outlay_command(&dir)
        .args(["add", "50", "Food", "--date", "2024-01-01"])
        .assert()
        .success();
    outlay_command(&dir)
        .args(["add", "20", "Transport", "--date", "2024-01-02"])
        .assert()
        .success();

    outlay_command(&dir)
        .args(["list", "--category", "Food"])
        .assert()
        .success()
        .stdout(contains("2024-01-01"))
        .stdout(contains("Transport").not());

    outlay_command(&dir)
        .args(["list", "--date", "2024-01-02"])
        .assert()
        .success()
        .stdout(contains("Transport"));
}

#[test]
fn cli_export_csv_writes_header_and_rows() {
    let dir = TempDir::new().unwrap();

    outlay_command(&dir)
        .args(["add", "50", "Food", "--date", "2024-01-01", "--description", "lunch"])
        .assert()
        .success();

    outlay_command(&dir)
        .args(["export", "csv", "--stdout"])
        .assert()
        .success()
        .stdout(contains("Date,Category,Amount,Description"))
        .stdout(contains("2024-01-01,Food,50.00,lunch"));
}

#[test]
fn cli_export_json_includes_schema_version() {
    let dir = TempDir::new().unwrap();

    outlay_command(&dir)
        .args(["add", "50", "Food", "--date", "2024-01-01"])
        .assert()
        .success();

    outlay_command(&dir)
        .args(["export", "json", "--stdout"])
        .assert()
        .success()
        .stdout(contains("\"schema_version\""))
        .stdout(contains("\"expense_count\": 1"));
}

#[test]
fn cli_survives_corrupt_ledger_lines() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("expenses.db"),
        "2024-01-01;Food;50;ok\ngarbage line\n",
    )
    .unwrap();

    outlay_command(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("2024-01-01"))
        .stderr(contains("malformed"));
}

#[test]
fn cli_categories_lists_the_fixed_set() {
    let dir = TempDir::new().unwrap();

    outlay_command(&dir)
        .args(["categories"])
        .assert()
        .success()
        .stdout(contains("Food"))
        .stdout(contains("Miscellaneous"));
}
