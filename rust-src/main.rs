//! Expense tracker CLI
//!
//! Records dated expenses, monthly budgets and simple spending statistics.

mod aggregation;
mod cli;
mod commands;
mod config;
mod controller;
mod error;
mod logging;
mod models;
mod storage;


fn main() {
    logging::init_logging();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");

        if let Some(err) = e.downcast_ref::<error::Error>() {
            if err.is_parse() || err.is_validation() {
                eprintln!("Dates look like YYYY-MM[-DD] (also '.' or '/'), amounts like 12.50.");
            }
        }

        std::process::exit(1);
    }
}
