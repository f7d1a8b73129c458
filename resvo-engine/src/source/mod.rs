//! Reservation sources
//!
//! The engine never performs I/O itself; hosts load a snapshot through a
//! source and hand the plain values to the calculation functions.
//! ```text
//!          ┌───────────────────────┐
//!          │ ReservationSource     │
//!          └──────────┬────────────┘
//!             ┌───────┴────────┐
//!             ▼                ▼
//!       MemorySource   JsonSnapshotSource
//!       (preloaded)    (snapshot file)
//! ```

mod json;
mod memory;

pub use json::{JsonSnapshotSource, Snapshot};
pub use memory::MemorySource;

use async_trait::async_trait;
use shared::models::{Reservation, RestaurantSettings};
use shared::AppResult;

/// Read side of the persistence collaborator
#[async_trait]
pub trait ReservationSource: Send + Sync {
    /// Every reservation of the restaurant, in storage order
    async fn load_reservations(&self, restaurant_id: &str) -> AppResult<Vec<Reservation>>;

    async fn load_settings(&self, restaurant_id: &str) -> AppResult<RestaurantSettings>;
}
