//! Expense tracker controller.
//!
//! Validates and normalizes input before handing it to storage, and builds
//! monthly reports from what storage returns.

use std::collections::HashMap;

use chrono::Month;

use crate::aggregation::{calculate_statistics, calculate_total_expenses};
use crate::controller::{format_amount, format_date};
use crate::error::Error;
use crate::models::{Expense, MonthData};
use crate::storage::Storage;


/// Operations offered to the presentation layer.
pub trait ExpenseApi {
    /// Build the report for one month. Never fails.
    fn create_month_data(&self, year: i32, month: Month) -> MonthData;

    fn add_expense(&self, expense: Expense) -> Result<(), Error>;

    fn remove_expense(&self, id: i64) -> Result<(), Error>;

    /// Set the budget for the month named by `date`.
    fn insert_budget_month(&self, amount: &str, date: &str) -> Result<(), Error>;

    fn update_default_budget(&self, amount: &str) -> Result<(), Error>;

    fn get_total_amount_by_category(&self) -> Result<HashMap<String, f64>, Error>;
}


/// Controller over a storage backend.
pub struct Controller<S> {
    db: S,
}


impl<S: Storage> Controller<S> {
    pub fn new(db: S) -> Self {
        Self { db }
    }

    /// Get the underlying storage.
    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.db
    }

    /// Fetch the expenses whose date falls in the given month.
    fn get_expenses_for_year_month(&self, year: i32, month: Month) -> Vec<Expense> {
        let pattern = format!("%{}-{:02}%", year, month.number_from_month());
        self.db.get_expenses_with_year_month(&pattern)
    }

    /// Resolve the budget for a month, falling back to the default budget.
    ///
    /// A stored value that does not parse is logged and treated as `0.00`.
    fn get_budget_for_year_month(&self, year_month: &str) -> f64 {
        let mut budget = self.db.get_budget_with_year_month(year_month);

        if budget.is_empty() {
            budget = self.db.get_default_budget();
        }

        match budget.parse::<f64>() {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(year_month, budget = %budget, "could not parse budget: {e}");
                0.00
            }
        }
    }
}


impl<S: Storage> ExpenseApi for Controller<S> {
    fn create_month_data(&self, year: i32, month: Month) -> MonthData {
        let expenses = self.get_expenses_for_year_month(year, month);
        let total_spendings = calculate_total_expenses(&expenses);
        let (mean_expense, standard_deviation_expense) = calculate_statistics(&expenses);

        let year_month = format!("{}-{:02}", year, month.number_from_month());
        let budget = self.get_budget_for_year_month(&year_month);

        MonthData {
            year,
            month,
            expenses,
            budget,
            total_spendings,
            money_left: budget - total_spendings,
            mean_expense,
            standard_deviation_expense,
        }
    }

    fn add_expense(&self, mut expense: Expense) -> Result<(), Error> {
        if !expense.amount.is_finite() {
            return Err(Error::InvalidAmount {
                amount: expense.amount.to_string(),
                source: None,
            });
        }

        expense.date = format_date(&expense.date)?;

        tracing::debug!(name = %expense.name, date = %expense.date, "adding expense");
        Ok(self.db.insert_expense(&expense)?)
    }

    fn remove_expense(&self, id: i64) -> Result<(), Error> {
        tracing::debug!(id, "removing expense");
        Ok(self.db.delete_expense(id)?)
    }

    fn insert_budget_month(&self, amount: &str, date: &str) -> Result<(), Error> {
        let amount = format_amount(amount)?;
        let date = format_date(date)?;

        tracing::debug!(amount = %amount, date = %date, "setting month budget");
        Ok(self.db.insert_budget(&amount, &date)?)
    }

    fn update_default_budget(&self, amount: &str) -> Result<(), Error> {
        let amount = format_amount(amount)?;

        tracing::debug!(amount = %amount, "setting default budget");
        Ok(self.db.update_default_budget(&amount)?)
    }

    fn get_total_amount_by_category(&self) -> Result<HashMap<String, f64>, Error> {
        Ok(self.db.get_total_amount_by_category()?)
    }
}
