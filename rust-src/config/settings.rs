//! Application settings and path constants.

use std::path::PathBuf;


/// Environment variable overriding the database path.
pub const DB_PATH_ENV: &str = "EXPENSES_DB";

/// Environment variable holding the log filter.
pub const LOG_FILTER_ENV: &str = "EXPENSES_LOG";

/// Log filter used when none is configured.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Category assigned when none is given.
pub const DEFAULT_CATEGORY: &str = "other";

/// Format used for "today" when adding an expense without a date.
pub const TODAY_DATE_FORMAT: &str = "%Y-%m-%d";


/// Get the default database path.
pub fn get_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".expense-tracker")
        .join("expenses.db")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(DB_PATH_ENV, "EXPENSES_DB");
        assert_eq!(DEFAULT_LOG_FILTER, "warn");
        assert_eq!(DEFAULT_CATEGORY, "other");
    }

    #[test]
    fn test_get_db_path() {
        let path = get_db_path();
        assert!(path.to_string_lossy().contains(".expense-tracker"));
        assert!(path.to_string_lossy().ends_with("expenses.db"));
    }
}
