//! CLI definitions using clap.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::commands;
use crate::config::{get_db_path, DB_PATH_ENV};
use crate::controller::Controller;
use crate::storage::SqliteStorage;


/// Expense tracker - record expenses and compare them against monthly budgets
#[derive(Parser)]
#[command(name = "expenses")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file (default: ~/.expense-tracker/expenses.db)
    #[arg(long, global = true, env = DB_PATH_ENV)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        name: String,

        /// Amount spent (negative for refunds)
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Date as YYYY-MM-DD, YYYY.MM.DD or YYYY/MM/DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Expense category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Remove an expense by id
    Remove {
        /// Expense id as shown in the month report
        id: i64,
    },

    /// Manage budgets
    Budget {
        #[command(subcommand)]
        command: BudgetCommands,
    },

    /// Show the report for one month
    Month {
        /// Year (default: current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month number (default: current month)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
        month: Option<u8>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show total spending per category
    Categories {
        /// Print the totals as JSON
        #[arg(long)]
        json: bool,
    },
}


#[derive(Subcommand)]
enum BudgetCommands {
    /// Set the budget for a single month
    Set {
        /// Budget amount
        #[arg(allow_negative_numbers = true)]
        amount: String,

        /// Month as YYYY-MM, YYYY.MM or YYYY/MM
        date: String,
    },

    /// Set the budget used for months without their own
    Default {
        /// Budget amount
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },
}


/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    let db_path = cli.db.unwrap_or_else(get_db_path);
    let storage = SqliteStorage::open(&db_path)
        .with_context(|| format!("Failed to open database: {}", db_path.display()))?;
    let controller = Controller::new(storage);

    match command {
        Commands::Add { name, amount, date, category } => {
            commands::add::run(&controller, name, amount, date, category)
        }
        Commands::Remove { id } => commands::remove::run(&controller, id),
        Commands::Budget { command } => match command {
            BudgetCommands::Set { amount, date } => {
                commands::budget::set_month(&controller, &amount, &date)
            }
            BudgetCommands::Default { amount } => {
                commands::budget::set_default(&controller, &amount)
            }
        },
        Commands::Month { year, month, json } => {
            commands::month::run(&controller, year, month, json)
        }
        Commands::Categories { json } => commands::categories::run(&controller, json),
    }
}
