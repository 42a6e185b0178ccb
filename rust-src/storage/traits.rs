//! Storage contract consumed by the controller.

use std::collections::HashMap;

use crate::error::StorageError;
use crate::models::Expense;


/// Persists and retrieves expenses and budgets.
///
/// Budgets travel as strings with two fractional digits. Reads that return a
/// plain `String` use the empty string for "not set".
pub trait Storage {
    /// Get expenses whose date matches a LIKE-style pattern such as `%2023-05%`.
    fn get_expenses_with_year_month(&self, pattern: &str) -> Vec<Expense>;

    /// Store a new expense. The storage assigns its id.
    fn insert_expense(&self, expense: &Expense) -> Result<(), StorageError>;

    fn delete_expense(&self, id: i64) -> Result<(), StorageError>;

    fn get_default_budget(&self) -> String;

    /// Get the budget stored for a `YYYY-MM` key.
    fn get_budget_with_year_month(&self, year_month: &str) -> String;

    fn insert_budget(&self, amount: &str, date: &str) -> Result<(), StorageError>;

    fn update_default_budget(&self, amount: &str) -> Result<(), StorageError>;

    /// Sum expense amounts per category.
    fn get_total_amount_by_category(&self) -> Result<HashMap<String, f64>, StorageError>;
}
