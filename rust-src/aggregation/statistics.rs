//! Summary statistics over expense amounts.

use crate::models::Expense;


/// Sum the amounts of all expenses.
pub fn calculate_total_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}


/// Calculate the mean and sample standard deviation of expense amounts.
///
/// An empty slice yields `(0.0, 0.0)`. The standard deviation uses an
/// `n - 1` denominator, so a single expense also has a deviation of `0.0`.
pub fn calculate_statistics(expenses: &[Expense]) -> (f64, f64) {
    if expenses.is_empty() {
        return (0.0, 0.0);
    }

    let n = expenses.len() as f64;
    let mean = calculate_total_expenses(expenses) / n;

    if expenses.len() < 2 {
        return (mean, 0.0);
    }

    let squared_deviations: f64 = expenses
        .iter()
        .map(|e| (e.amount - mean).powi(2))
        .sum();
    let stddev = (squared_deviations / (n - 1.0)).sqrt();

    (mean, stddev)
}
