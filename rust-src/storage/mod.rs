//! Storage layer for expenses and budgets.

mod database;
mod traits;

pub use database::SqliteStorage;
pub use traits::Storage;
