//! JSON snapshot source against real files

use std::path::Path;

use chrono::NaiveDate;
use chrono_tz::Tz;
use resvo_engine::{JsonSnapshotSource, ReservationSource};
use serde_json::json;
use shared::{ErrorCode, ReservationStatus, ServiceType};

fn write(path: &Path, value: &serde_json::Value) {
    std::fs::write(path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

fn snapshot() -> serde_json::Value {
    json!({
        "restaurants": [
            {
                "id": "rest-1",
                "name": "Trattoria da Marco",
                "max_capacity_lunch": 80,
                "max_capacity_dinner": 120,
                "green_threshold": 50
            },
            {
                "id": "rest-2",
                "name": "Pizzeria",
                "max_capacity_lunch": 40,
                "max_capacity_dinner": 40,
                "green_threshold": 90,
                "yellow_threshold": 70
            }
        ],
        "reservations": [
            {
                "id": "r-1",
                "restaurant_id": "rest-1",
                "date": "2024-05-08",
                "time": "12:30:00",
                "service_type": "lunch",
                "num_guests": 4,
                "status": "confirmed",
                "customer_name": "Giulia Bianchi",
                "customer_phone": "+39 333 111 2222",
                "customer_email": "",
                "created_at": "2024-05-01T10:00:00Z"
            },
            {
                "id": "r-2",
                "restaurant_id": "rest-1",
                "date": "2024-05-08T23:30:00Z",
                "time": "20:00",
                "service_type": "dinner",
                "num_guests": 2,
                "status": "pending",
                "customer_name": "Marco Verdi",
                "customer_phone": "3479998888",
                "created_at": "2024-05-02T08:00:00+02:00",
                "updated_at": "2024-05-03T08:00:00+02:00"
            },
            {
                "id": "r-3",
                "restaurant_id": "rest-2",
                "date": "2024-05-08",
                "time": "13:00",
                "service_type": "lunch",
                "num_guests": 6,
                "status": "cancelled",
                "customer_name": "Anna Neri",
                "customer_phone": "3331234567",
                "created_at": "2024-05-01T10:00:00Z"
            }
        ]
    })
}

#[tokio::test]
async fn test_loads_reservations_for_one_restaurant() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    write(&path, &snapshot());

    let source = JsonSnapshotSource::new(&path, Tz::Europe__Rome);
    let reservations = source.load_reservations("rest-1").await.unwrap();

    assert_eq!(reservations.len(), 2);
    assert!(reservations.iter().all(|r| r.restaurant_id == "rest-1"));

    let lunch = &reservations[0];
    assert_eq!(lunch.time, "12:30");
    assert_eq!(lunch.service_type, ServiceType::Lunch);
    assert_eq!(lunch.customer_email, None);
    assert_eq!(lunch.updated_at, lunch.created_at);

    // 23:30 UTC is already the next day in Rome
    let dinner = &reservations[1];
    assert_eq!(dinner.date, NaiveDate::from_ymd_opt(2024, 5, 9).unwrap());
    assert_eq!(dinner.status, ReservationStatus::Pending);
    assert!(dinner.updated_at > dinner.created_at);
}

#[tokio::test]
async fn test_calendar_day_depends_on_timezone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    write(&path, &snapshot());

    let source = JsonSnapshotSource::new(&path, Tz::UTC);
    let reservations = source.load_reservations("rest-1").await.unwrap();
    assert_eq!(reservations[1].date, NaiveDate::from_ymd_opt(2024, 5, 8).unwrap());
}

#[tokio::test]
async fn test_settings_defaults_and_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    write(&path, &snapshot());
    let source: Box<dyn ReservationSource> = Box::new(JsonSnapshotSource::new(&path, Tz::UTC));

    let settings = source.load_settings("rest-1").await.unwrap();
    assert_eq!(settings.name, "Trattoria da Marco");
    assert_eq!(settings.max_capacity_dinner, 120);
    assert_eq!(settings.default_table_duration, 120);
    assert_eq!(settings.thresholds.green(), 50.0);
    assert_eq!(settings.thresholds.yellow(), 80.0);
    assert_eq!(settings.thresholds.orange(), 99.0);

    // green 90 above yellow 70
    let err = source.load_settings("rest-2").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidConfiguration);
    assert_eq!(err.detail_str("restaurant_id"), Some("rest-2"));

    let err = source.load_settings("rest-404").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::RestaurantNotFound);
}

#[tokio::test]
async fn test_snapshot_is_reread_on_every_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    write(&path, &snapshot());
    let source = JsonSnapshotSource::new(&path, Tz::UTC);
    assert_eq!(source.load_reservations("rest-2").await.unwrap().len(), 1);

    let mut refreshed = snapshot();
    refreshed["reservations"].as_array_mut().unwrap().retain(|r| r["restaurant_id"] != "rest-2");
    write(&path, &refreshed);

    assert!(source.load_reservations("rest-2").await.unwrap().is_empty());
    assert_eq!(source.first_restaurant_id().await.unwrap().as_deref(), Some("rest-1"));
}

#[tokio::test]
async fn test_unknown_status_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    let mut broken = snapshot();
    broken["reservations"][0]["status"] = json!("no-show");
    write(&path, &broken);

    let source = JsonSnapshotSource::new(&path, Tz::UTC);
    let err = source.load_reservations("rest-1").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MalformedRecord);
    assert_eq!(err.detail_str("field"), Some("status"));
    assert_eq!(err.detail_str("reservation_id"), Some("r-1"));
}
