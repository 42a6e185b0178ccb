//! Categories command - show spending per category.

use std::collections::BTreeMap;

use anyhow::Result;

use crate::commands::format::{format_currency, percentage};
use crate::controller::ExpenseApi;


/// Run the categories command.
pub fn run(api: &impl ExpenseApi, json: bool) -> Result<()> {
    let totals = api.get_total_amount_by_category()?;

    if json {
        let sorted: BTreeMap<_, _> = totals.into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&sorted)?);
        return Ok(());
    }

    if totals.is_empty() {
        println!("No expenses recorded yet. Add one with 'expenses add'.");
        return Ok(());
    }

    let overall: f64 = totals.values().sum();
    let mut categories: Vec<_> = totals.into_iter().collect();
    categories.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    println!("\nSPENDING BY CATEGORY");
    println!("{}", "-".repeat(60));
    for (category, amount) in &categories {
        println!(
            "  {:30} {:>15} ({:5.1}%)",
            category,
            format_currency(*amount),
            percentage(*amount, overall)
        );
    }
    println!("{}", "-".repeat(60));
    println!("  {:30} {:>15}", "Total", format_currency(overall));

    Ok(())
}
