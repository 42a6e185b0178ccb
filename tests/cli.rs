//! End-to-end tests for the expenses binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;


fn expenses(tmp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSES_DB", tmp_dir.path().join("expenses.db"))
        .env_remove("EXPENSES_LOG");
    cmd
}


#[test]
fn test_no_subcommand_prints_help() {
    let tmp_dir = TempDir::new().unwrap();

    expenses(&tmp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_add_and_month_report() {
    let tmp_dir = TempDir::new().unwrap();

    expenses(&tmp_dir)
        .args(["add", "Coffee", "10", "--date", "2023/05/10", "--category", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added"));
    expenses(&tmp_dir)
        .args(["add", "Lunch", "20", "-d", "2023.5.11", "-c", "food"])
        .assert()
        .success();
    expenses(&tmp_dir)
        .args(["add", "Train", "30", "-d", "2023-05-12", "-c", "transport"])
        .assert()
        .success();
    expenses(&tmp_dir)
        .args(["budget", "default", "100"])
        .assert()
        .success();

    let output = expenses(&tmp_dir)
        .args(["month", "--year", "2023", "--month", "5", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["year"], 2023);
    assert_eq!(report["month"], 5);
    assert_eq!(report["expenses"].as_array().unwrap().len(), 3);
    assert_eq!(report["expenses"][0]["date"], "2023-05-10");
    assert_eq!(report["total_spendings"], 60.0);
    assert_eq!(report["mean_expense"], 20.0);
    assert_eq!(report["standard_deviation_expense"], 10.0);
    assert_eq!(report["budget"], 100.0);
    assert_eq!(report["money_left"], 40.0);
}

#[test]
fn test_month_budget_overrides_default() {
    let tmp_dir = TempDir::new().unwrap();

    expenses(&tmp_dir).args(["budget", "default", "100"]).assert().success();
    expenses(&tmp_dir).args(["budget", "set", "50", "2023-05"]).assert().success();

    expenses(&tmp_dir)
        .args(["month", "-y", "2023", "-m", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses for May 2023"))
        .stdout(predicate::str::contains("50.00"));
}

#[test]
fn test_invalid_date_is_rejected() {
    let tmp_dir = TempDir::new().unwrap();

    expenses(&tmp_dir)
        .args(["add", "Coffee", "3.5", "--date", "2023-13-01"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("month should be from 1 to 12"));
}

#[test]
fn test_invalid_budget_amount_is_rejected() {
    let tmp_dir = TempDir::new().unwrap();

    expenses(&tmp_dir)
        .args(["budget", "set", "not-a-number", "2023-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid number"));
}

#[test]
fn test_remove_missing_expense_fails() {
    let tmp_dir = TempDir::new().unwrap();

    expenses(&tmp_dir)
        .args(["remove", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no expense with id 7"));
}

#[test]
fn test_categories_json() {
    let tmp_dir = TempDir::new().unwrap();

    expenses(&tmp_dir)
        .args(["add", "Coffee", "3.5", "-d", "2023-05-10", "-c", "food"])
        .assert()
        .success();
    expenses(&tmp_dir)
        .args(["add", "Bus", "2", "-d", "2023-06-01"])
        .assert()
        .success();

    let output = expenses(&tmp_dir).args(["categories", "--json"]).output().unwrap();
    assert!(output.status.success());

    let totals: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(totals["food"], 3.5);
    assert_eq!(totals["other"], 2.0);
}

#[test]
fn test_budget_confirmation_shows_stored_values() {
    let tmp_dir = TempDir::new().unwrap();

    expenses(&tmp_dir)
        .args(["budget", "set", "50", "2023/5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget for 2023-05 set to 50.00"));
    expenses(&tmp_dir)
        .args(["budget", "default", "7.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default budget set to 7.50"));
}

#[test]
fn test_negative_amounts_are_accepted() {
    let tmp_dir = TempDir::new().unwrap();

    expenses(&tmp_dir)
        .args(["add", "Refund", "-5", "-d", "2023-05-10"])
        .assert()
        .success();
    expenses(&tmp_dir)
        .args(["budget", "default", "-10"])
        .assert()
        .success();

    let output = expenses(&tmp_dir)
        .args(["month", "-y", "2023", "-m", "5", "--json"])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_spendings"], -5.0);
    assert_eq!(report["budget"], -10.0);
}

#[test]
fn test_non_finite_expense_amount_is_rejected() {
    let tmp_dir = TempDir::new().unwrap();

    expenses(&tmp_dir)
        .args(["add", "Broken", "inf", "-d", "2023-05-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid number"));

    let output = expenses(&tmp_dir)
        .args(["month", "-y", "2023", "-m", "5", "--json"])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["expenses"].as_array().unwrap().is_empty());
    assert_eq!(report["total_spendings"], 0.0);
}
