//! Month command - show the monthly report.

use anyhow::{anyhow, Result};
use chrono::{Datelike, Local, Month};

use crate::commands::format::format_currency;
use crate::controller::ExpenseApi;
use crate::models::MonthData;


/// Run the month command.
pub fn run(api: &impl ExpenseApi, year: Option<i32>, month: Option<u8>, json: bool) -> Result<()> {
    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month_number = month.unwrap_or(today.month() as u8);
    let month = Month::try_from(month_number)
        .map_err(|_| anyhow!("month should be from 1 to 12, got {month_number}"))?;

    let data = api.create_month_data(year, month);

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        print_report(&data);
    }

    Ok(())
}


/// Print the month report as a table.
fn print_report(data: &MonthData) {
    let title = format!("Expenses for {} {}", data.month.name(), data.year);

    println!("\n{}", "=".repeat(60));
    println!("{:^60}", title);
    println!("{}\n", "=".repeat(60));

    if data.expenses.is_empty() {
        println!("No expenses recorded for {}.", data.year_month());
    } else {
        println!("  {:>5}  {:10}  {:12}  {:18} {:>8}", "ID", "DATE", "CATEGORY", "NAME", "AMOUNT");
        println!("{}", "-".repeat(60));
        for expense in &data.expenses {
            println!(
                "  {:>5}  {:10}  {:12}  {:18} {:>8}",
                expense.id,
                expense.date,
                truncate(&expense.category, 12),
                truncate(&expense.name, 18),
                format_currency(expense.amount)
            );
        }
    }

    println!("\nSUMMARY");
    println!("{}", "-".repeat(40));
    println!("  Expenses:            {:>15}", data.expenses.len());
    println!("  Total Spendings:     {:>15}", format_currency(data.total_spendings));
    println!("  Mean Expense:        {:>15}", format_currency(data.mean_expense));
    println!("  Std. Deviation:      {:>15}", format_currency(data.standard_deviation_expense));

    println!("\nBUDGET");
    println!("{}", "-".repeat(40));
    println!("  Budget:              {:>15}", format_currency(data.budget));
    if data.is_over_budget() {
        println!(
            "  \x1b[31mOver Budget:         {:>15}\x1b[0m",
            format_currency(data.money_left.abs())
        );
    } else {
        println!("  Money Left:          {:>15}", format_currency(data.money_left));
    }
}


/// Shorten text to `max` characters, marking the cut with '~'.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut short: String = text.chars().take(max - 1).collect();
    short.push('~');
    short
}
