//! Remove command - delete an expense.

use anyhow::Result;

use crate::controller::ExpenseApi;


/// Run the remove command.
pub fn run(api: &impl ExpenseApi, id: i64) -> Result<()> {
    api.remove_expense(id)?;

    println!("\x1b[32m+ Expense {id} removed\x1b[0m");
    Ok(())
}
