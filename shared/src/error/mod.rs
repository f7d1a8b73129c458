//! Unified error system for Resvo
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Reservation errors
//! - 5xxx: Restaurant / configuration errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::malformed_record("num_guests", "is missing");
//! assert_eq!(err.code, ErrorCode::MalformedRecord);
//!
//! let err = AppError::invalid_configuration("green threshold above yellow")
//!     .with_detail("green", 90);
//! assert_eq!(err.code.code(), 5002);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
