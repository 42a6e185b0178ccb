//! SQLite storage for expenses and budgets.

use std::collections::HashMap;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::StorageError;
use crate::models::Expense;
use crate::storage::Storage;


/// Expense storage backed by a SQLite database file.
pub struct SqliteStorage {
    conn: Connection,
}


impl SqliteStorage {
    /// Open the database at `db_path`, creating it and its tables if needed.
    pub fn open(db_path: &Path) -> Result<Self, StorageError> {
        // Create parent directory if needed
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(db_path)?;
        init_database(&conn)?;

        tracing::debug!(path = %db_path.display(), "opened expense database");
        Ok(Self { conn })
    }
}


/// Create the tables used by the tracker.
fn init_database(conn: &Connection) -> Result<(), StorageError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            date TEXT NOT NULL,
            amount REAL NOT NULL,
            category TEXT NOT NULL
        )",
        [],
    )?;

    // Index for month lookups
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date)",
        [],
    )?;

    // Month-specific budgets keyed by YYYY-MM
    conn.execute(
        "CREATE TABLE IF NOT EXISTS budgets (
            date TEXT PRIMARY KEY,
            amount TEXT NOT NULL
        )",
        [],
    )?;

    // Single-row table for the default budget
    conn.execute(
        "CREATE TABLE IF NOT EXISTS default_budget (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            amount TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}


impl Storage for SqliteStorage {
    fn get_expenses_with_year_month(&self, pattern: &str) -> Vec<Expense> {
        let result = self
            .conn
            .prepare(
                "SELECT id, name, date, amount, category FROM expenses
                 WHERE date LIKE ?1 ORDER BY date, id",
            )
            .and_then(|mut stmt| {
                let expenses = stmt
                    .query_map(params![pattern], |row| {
                        Ok(Expense {
                            id: row.get(0)?,
                            name: row.get(1)?,
                            date: row.get(2)?,
                            amount: row.get(3)?,
                            category: row.get(4)?,
                        })
                    })?
                    .collect::<Result<Vec<_>, _>>();
                expenses
            });

        match result {
            Ok(expenses) => expenses,
            Err(e) => {
                tracing::warn!(pattern, error = %e, "could not load expenses");
                Vec::new()
            }
        }
    }

    fn insert_expense(&self, expense: &Expense) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO expenses (name, date, amount, category) VALUES (?1, ?2, ?3, ?4)",
            params![expense.name, expense.date, expense.amount, expense.category],
        )?;

        tracing::debug!(id = self.conn.last_insert_rowid(), "inserted expense");
        Ok(())
    }

    fn delete_expense(&self, id: i64) -> Result<(), StorageError> {
        let deleted = self
            .conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![id])?;

        if deleted == 0 {
            return Err(StorageError::ExpenseNotFound(id));
        }

        Ok(())
    }

    fn get_default_budget(&self) -> String {
        self.conn
            .query_row("SELECT amount FROM default_budget WHERE id = 1", [], |row| row.get(0))
            .optional()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "could not load default budget");
                None
            })
            .unwrap_or_default()
    }

    fn get_budget_with_year_month(&self, year_month: &str) -> String {
        self.conn
            .query_row(
                "SELECT amount FROM budgets WHERE date = ?1",
                params![year_month],
                |row| row.get(0),
            )
            .optional()
            .unwrap_or_else(|e| {
                tracing::warn!(year_month, error = %e, "could not load month budget");
                None
            })
            .unwrap_or_default()
    }

    fn insert_budget(&self, amount: &str, date: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO budgets (date, amount) VALUES (?1, ?2)",
            params![date, amount],
        )?;
        Ok(())
    }

    fn update_default_budget(&self, amount: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO default_budget (id, amount) VALUES (1, ?1)",
            params![amount],
        )?;
        Ok(())
    }

    fn get_total_amount_by_category(&self) -> Result<HashMap<String, f64>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT category, SUM(amount) FROM expenses GROUP BY category")?;

        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
        })?;

        let mut totals = HashMap::new();
        for row in rows {
            let (category, amount) = row?;
            totals.insert(category, amount);
        }

        Ok(totals)
    }
}
