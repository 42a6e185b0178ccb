//! Configuration and settings for the expense tracker.

mod settings;

pub use settings::{
    get_db_path,
    DB_PATH_ENV,
    DEFAULT_CATEGORY,
    DEFAULT_LOG_FILTER,
    LOG_FILTER_ENV,
    TODAY_DATE_FORMAT,
};
