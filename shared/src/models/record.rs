//! Raw storage records and their mapping into domain models
//!
//! The hosted data service returns loosely typed snake_case rows. Every
//! field is optional here; the mapping functions check presence and parse
//! each value, failing with `MalformedRecord` naming the offending field.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::reservation::{Reservation, ReservationStatus, ServiceType};
use super::restaurant::{
    CapacityThresholds, DEFAULT_GREEN_THRESHOLD, DEFAULT_ORANGE_THRESHOLD, DEFAULT_TABLE_DURATION,
    DEFAULT_YELLOW_THRESHOLD, RestaurantSettings,
};
use crate::error::{AppError, AppResult};

/// `reservations` row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationRecord {
    pub id: Option<String>,
    pub restaurant_id: Option<String>,
    /// `YYYY-MM-DD` or an RFC 3339 instant
    pub date: Option<String>,
    /// `HH:MM` or `HH:MM:SS`
    pub time: Option<String>,
    pub service_type: Option<String>,
    pub num_guests: Option<i64>,
    pub status: Option<String>,
    pub table_id: Option<String>,
    pub notes: Option<String>,
    pub special_requests: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// `restaurants` row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub max_capacity_lunch: Option<i64>,
    pub max_capacity_dinner: Option<i64>,
    pub default_table_duration: Option<i64>,
    pub green_threshold: Option<f64>,
    pub yellow_threshold: Option<f64>,
    pub orange_threshold: Option<f64>,
}

impl ReservationRecord {
    /// Map into a [`Reservation`], resolving instants to calendar days in `tz`
    pub fn into_reservation(self, tz: Tz) -> AppResult<Reservation> {
        let id = required_text(self.id, "id")?;
        let restaurant_id = required_text(self.restaurant_id, "restaurant_id")?;
        let date = parse_calendar_day(&required_text(self.date, "date")?, tz)?;
        let time = parse_time_of_day(&required_text(self.time, "time")?)?;
        let service_type: ServiceType = required_text(self.service_type, "service_type")?.parse()?;
        let status: ReservationStatus = required_text(self.status, "status")?.parse()?;

        let guests = required(self.num_guests, "num_guests")?;
        let num_guests = u32::try_from(guests)
            .ok()
            .filter(|g| *g >= 1)
            .ok_or_else(|| {
                AppError::malformed_record(
                    "num_guests",
                    format!("must be at least 1 (got {})", guests),
                )
            })?;

        let created_at =
            parse_timestamp(&required_text(self.created_at, "created_at")?, "created_at")?;
        let updated_at = match optional_text(self.updated_at) {
            Some(raw) => parse_timestamp(&raw, "updated_at")?,
            None => created_at,
        };

        Ok(Reservation {
            id,
            restaurant_id,
            date,
            time,
            service_type,
            num_guests,
            status,
            table_id: optional_text(self.table_id),
            notes: optional_text(self.notes),
            special_requests: optional_text(self.special_requests),
            customer_name: required_text(self.customer_name, "customer_name")?,
            customer_phone: required_text(self.customer_phone, "customer_phone")?,
            customer_email: optional_text(self.customer_email),
            created_at,
            updated_at,
        })
    }
}

impl RestaurantRecord {
    /// Map into [`RestaurantSettings`]
    ///
    /// Absent thresholds default to 60/80/99 individually; the resulting
    /// triple must still be ordered.
    pub fn into_settings(self) -> AppResult<RestaurantSettings> {
        let id = required_text(self.id, "id")?;
        let max_capacity_lunch = capacity(self.max_capacity_lunch, "max_capacity_lunch")?;
        let max_capacity_dinner = capacity(self.max_capacity_dinner, "max_capacity_dinner")?;

        let default_table_duration = match self.default_table_duration {
            Some(minutes) => u32::try_from(minutes).map_err(|_| {
                AppError::malformed_record(
                    "default_table_duration",
                    format!("must be non-negative (got {})", minutes),
                )
            })?,
            None => DEFAULT_TABLE_DURATION,
        };

        let thresholds = CapacityThresholds::new(
            self.green_threshold.unwrap_or(DEFAULT_GREEN_THRESHOLD),
            self.yellow_threshold.unwrap_or(DEFAULT_YELLOW_THRESHOLD),
            self.orange_threshold.unwrap_or(DEFAULT_ORANGE_THRESHOLD),
        )
        .map_err(|e| e.with_detail("restaurant_id", id.clone()))?;

        Ok(RestaurantSettings {
            name: self.name.unwrap_or_default(),
            id,
            max_capacity_lunch,
            max_capacity_dinner,
            default_table_duration,
            thresholds,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::malformed_record(field, "is missing"))
}

fn required_text(value: Option<String>, field: &str) -> AppResult<String> {
    optional_text(value).ok_or_else(|| AppError::malformed_record(field, "is missing"))
}

fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn capacity(value: Option<i64>, field: &str) -> AppResult<i32> {
    let seats = required(value, field)?;
    match i32::try_from(seats) {
        Ok(seats) if seats >= 1 => Ok(seats),
        _ => Err(AppError::invalid_configuration(format!(
            "{} must be at least 1 (got {})",
            field, seats
        ))
        .with_detail("field", field)),
    }
}

/// Resolve a stored date to its calendar day in `tz`
pub fn parse_calendar_day(raw: &str, tz: Tz) -> AppResult<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&tz).date_naive())
        .map_err(|_| AppError::malformed_record("date", format!("has invalid value '{}'", raw)))
}

/// Normalize `HH:MM[:SS]` to zero-padded `HH:MM`
pub fn parse_time_of_day(raw: &str) -> AppResult<String> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| AppError::malformed_record("time", format!("has invalid value '{}'", raw)))
}

fn parse_timestamp(raw: &str, field: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::malformed_record(field, format!("has invalid value '{}'", raw)))
}
