//! In-process source backed by preloaded values

use std::sync::Arc;

use async_trait::async_trait;
use shared::models::{Reservation, RestaurantSettings};
use shared::{AppError, AppResult};
use tokio::sync::RwLock;

use super::ReservationSource;

#[derive(Debug, Default)]
struct Store {
    restaurants: Vec<RestaurantSettings>,
    reservations: Vec<Reservation>,
}

/// Cloning shares the underlying store
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    store: Arc<RwLock<Store>>,
}

impl MemorySource {
    pub fn new(restaurants: Vec<RestaurantSettings>, reservations: Vec<Reservation>) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store {
                restaurants,
                reservations,
            })),
        }
    }

    /// Swap in a fresh reservation snapshot
    pub async fn replace_reservations(&self, reservations: Vec<Reservation>) {
        let mut store = self.store.write().await;
        tracing::debug!(
            previous = store.reservations.len(),
            current = reservations.len(),
            "Reservation snapshot replaced"
        );
        store.reservations = reservations;
    }
}

#[async_trait]
impl ReservationSource for MemorySource {
    async fn load_reservations(&self, restaurant_id: &str) -> AppResult<Vec<Reservation>> {
        let store = self.store.read().await;
        Ok(store
            .reservations
            .iter()
            .filter(|r| r.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }

    async fn load_settings(&self, restaurant_id: &str) -> AppResult<RestaurantSettings> {
        let store = self.store.read().await;
        store
            .restaurants
            .iter()
            .find(|s| s.id == restaurant_id)
            .cloned()
            .ok_or_else(|| AppError::restaurant_not_found(restaurant_id))
    }
}
