//! Shared types for the Resvo workspace
//!
//! Reservation and restaurant models, raw record mapping and the unified
//! error system used by the engine crate.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{
    CapacityThresholds, Reservation, ReservationRecord, ReservationStatus, RestaurantRecord,
    RestaurantSettings, ServiceType,
};
pub use serde::{Deserialize, Serialize};
