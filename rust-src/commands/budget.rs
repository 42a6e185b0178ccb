//! Budget subcommands.

use anyhow::Result;

use crate::controller::{format_amount, format_date, ExpenseApi};


/// Set the budget for one month.
pub fn set_month(api: &impl ExpenseApi, amount: &str, date: &str) -> Result<()> {
    api.insert_budget_month(amount, date)?;

    // Echo what was stored, not what was typed
    let amount = format_amount(amount)?;
    let date = format_date(date)?;
    println!("\x1b[32m+ Budget for {date} set to {amount}\x1b[0m");
    Ok(())
}


/// Set the default budget.
pub fn set_default(api: &impl ExpenseApi, amount: &str) -> Result<()> {
    api.update_default_budget(amount)?;

    let amount = format_amount(amount)?;
    println!("\x1b[32m+ Default budget set to {amount}\x1b[0m");
    Ok(())
}
