//! Data models
//!
//! Shared between the engine and whatever UI or service layer hosts it.
//! Domain types are strongly typed; `record` holds the raw storage rows and
//! the explicit mapping into them.

pub mod record;
pub mod reservation;
pub mod restaurant;

// Re-exports
pub use record::*;
pub use reservation::*;
pub use restaurant::*;
