//! CLI command implementations.

pub mod add;
pub mod budget;
pub mod categories;
pub mod month;
pub mod remove;

mod format;
