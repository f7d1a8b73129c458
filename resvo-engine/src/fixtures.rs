//! Reservation builders for unit tests

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{NaiveDate, TimeZone, Utc};
use shared::models::{Reservation, ReservationStatus, ServiceType};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

pub fn day(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

pub fn reservation(
    date: &str,
    time: &str,
    service_type: ServiceType,
    num_guests: u32,
    status: ReservationStatus,
) -> Reservation {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    Reservation {
        id: format!("res-{}", id),
        restaurant_id: "rest-1".to_string(),
        date: day(date),
        time: time.to_string(),
        service_type,
        num_guests,
        status,
        table_id: None,
        notes: None,
        special_requests: None,
        customer_name: format!("Customer {}", id),
        customer_phone: "3330000000".to_string(),
        customer_email: None,
        created_at,
        updated_at: created_at,
    }
}

pub fn confirmed(date: &str, service_type: ServiceType, num_guests: u32) -> Reservation {
    let time = match service_type {
        ServiceType::Lunch => "12:30",
        ServiceType::Dinner => "20:00",
    };
    reservation(date, time, service_type, num_guests, ReservationStatus::Confirmed)
}

pub fn with_status(mut res: Reservation, status: ReservationStatus) -> Reservation {
    res.status = status;
    res
}
