//! Aggregation layer for expense statistics.

mod statistics;

pub use statistics::{calculate_statistics, calculate_total_expenses};
