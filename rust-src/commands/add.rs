//! Add command - record a new expense.

use anyhow::Result;
use chrono::Local;

use crate::config::{DEFAULT_CATEGORY, TODAY_DATE_FORMAT};
use crate::controller::ExpenseApi;
use crate::models::Expense;


/// Run the add command.
pub fn run(
    api: &impl ExpenseApi,
    name: String,
    amount: f64,
    date: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().format(TODAY_DATE_FORMAT).to_string());
    let category = category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let expense = Expense::new(name, date, amount, category);
    let summary = format!("{} ({:.2}, {})", expense.name, expense.amount, expense.category);

    api.add_expense(expense)?;

    println!("\x1b[32m+ Expense added:\x1b[0m {summary}");
    Ok(())
}
