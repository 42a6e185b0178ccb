//! Input validation and orchestration between the CLI and storage.

mod date_format;
mod tracker;

pub use date_format::{format_amount, format_date};
pub use tracker::{Controller, ExpenseApi};
