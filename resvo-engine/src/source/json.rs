//! JSON snapshot source
//!
//! Reads an export of the hosted tables:
//! ```json
//! { "restaurants": [ { "id": "...", ... } ], "reservations": [ ... ] }
//! ```
//! The file is read again on every load so a refreshed export is picked up
//! without restarting.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use shared::models::{Reservation, ReservationRecord, RestaurantRecord, RestaurantSettings};
use shared::{AppError, AppResult};

use super::ReservationSource;

/// Raw content of a snapshot file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub restaurants: Vec<RestaurantRecord>,
    pub reservations: Vec<ReservationRecord>,
}

#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    path: PathBuf,
    /// Timezone used to resolve stored instants to calendar days
    tz: Tz,
}

impl JsonSnapshotSource {
    pub fn new(path: impl Into<PathBuf>, tz: Tz) -> Self {
        Self {
            path: path.into(),
            tz,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read_snapshot(&self) -> AppResult<Snapshot> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to read snapshot {}: {}",
                self.path.display(),
                e
            ))
            .with_detail("path", self.path.display().to_string())
        })?;

        let snapshot: Snapshot = serde_json::from_str(&raw).map_err(|e| {
            AppError::storage(format!(
                "Invalid snapshot {}: {}",
                self.path.display(),
                e
            ))
            .with_detail("path", self.path.display().to_string())
        })?;

        tracing::debug!(
            path = %self.path.display(),
            restaurants = snapshot.restaurants.len(),
            reservations = snapshot.reservations.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Id of the first restaurant in the snapshot, if any
    pub async fn first_restaurant_id(&self) -> AppResult<Option<String>> {
        let snapshot = self.read_snapshot().await?;
        Ok(snapshot.restaurants.into_iter().find_map(|r| r.id))
    }
}

#[async_trait]
impl ReservationSource for JsonSnapshotSource {
    async fn load_reservations(&self, restaurant_id: &str) -> AppResult<Vec<Reservation>> {
        let snapshot = self.read_snapshot().await?;
        let reservations = snapshot
            .reservations
            .into_iter()
            .filter(|record| record.restaurant_id.as_deref() == Some(restaurant_id))
            .map(|record| {
                let id = record.id.clone();
                record.into_reservation(self.tz).map_err(|e| match id {
                    Some(id) => e.with_detail("reservation_id", id),
                    None => e,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        tracing::info!(
            restaurant_id = %restaurant_id,
            count = reservations.len(),
            "Reservations loaded"
        );
        Ok(reservations)
    }

    async fn load_settings(&self, restaurant_id: &str) -> AppResult<RestaurantSettings> {
        let snapshot = self.read_snapshot().await?;
        snapshot
            .restaurants
            .into_iter()
            .find(|record| record.id.as_deref() == Some(restaurant_id))
            .ok_or_else(|| AppError::restaurant_not_found(restaurant_id))?
            .into_settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;
    use std::io::Write;

    fn write_snapshot(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_missing_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonSnapshotSource::new(dir.path().join("nope.json"), Tz::UTC);
        let err = source.load_settings("rest-1").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.detail_str("path").is_some());
    }

    #[tokio::test]
    async fn test_invalid_json_is_storage_error() {
        let file = write_snapshot("{ not json");
        let source = JsonSnapshotSource::new(file.path(), Tz::UTC);
        let err = source.load_reservations("rest-1").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[tokio::test]
    async fn test_malformed_record_carries_reservation_id() {
        let file = write_snapshot(
            r#"{
                "restaurants": [],
                "reservations": [
                    { "id": "r-9", "restaurant_id": "rest-1", "date": "2024-05-08" }
                ]
            }"#,
        );
        let source = JsonSnapshotSource::new(file.path(), Tz::UTC);
        let err = source.load_reservations("rest-1").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedRecord);
        assert_eq!(err.detail_str("reservation_id"), Some("r-9"));
    }

    #[tokio::test]
    async fn test_empty_snapshot_sections_default() {
        let file = write_snapshot("{}");
        let source = JsonSnapshotSource::new(file.path(), Tz::UTC);
        assert!(source.load_reservations("rest-1").await.unwrap().is_empty());
        assert_eq!(source.first_restaurant_id().await.unwrap(), None);
        let err = source.load_settings("rest-1").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RestaurantNotFound);
    }
}
