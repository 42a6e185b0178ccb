//! Data models for expenses and monthly reports.

mod expense;

pub use expense::{Expense, MonthData};
