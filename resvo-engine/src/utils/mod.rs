//! Utilities: calendar helpers and logging

pub mod logger;
pub mod time;

pub use logger::{init_logger, init_logger_with_file};
pub use time::BusinessCalendar;
