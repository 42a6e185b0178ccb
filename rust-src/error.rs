//! Error types for the controller and storage layers.

use std::num::{ParseFloatError, ParseIntError};


/// Errors raised while validating input or talking to storage.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A date component was not an integer.
    #[error("date component {token:?} should be integer: {source}")]
    InvalidDateComponent {
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// A budget amount was not a finite number.
    #[error("amount {amount:?} is not a valid number")]
    InvalidAmount {
        amount: String,
        #[source]
        source: Option<ParseFloatError>,
    },

    #[error("month should be from 1 to 12, got {0}")]
    MonthOutOfRange(i32),

    #[error("day should be from 1 to 31, got {0}")]
    DayOutOfRange(i32),

    /// Fewer than two components (year and month) were supplied.
    #[error("date {0:?} should contain at least a year and a month")]
    IncompleteDate(String),

    #[error("date {0:?} has more than year, month and day")]
    TooManyDateComponents(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}


impl Error {
    /// Check if the input could not be parsed as a number.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::InvalidDateComponent { .. } | Error::InvalidAmount { .. })
    }

    /// Check if the input parsed but fell outside the accepted ranges.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MonthOutOfRange(_)
                | Error::DayOutOfRange(_)
                | Error::IncompleteDate(_)
                | Error::TooManyDateComponents(_)
        )
    }
}


/// Errors reported by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("could not prepare storage location: {0}")]
    Io(#[from] std::io::Error),

    #[error("no expense with id {0}")]
    ExpenseNotFound(i64),
}
