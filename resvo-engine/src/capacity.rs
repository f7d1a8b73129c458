//! Capacity classification (semaforo di occupazione)
//!
//! Turns the guests booked for one service into remaining seats, an
//! occupancy percentage and a colour band.

use serde::{Deserialize, Serialize};
use shared::models::{CapacityThresholds, Reservation};

/// Colour band of a service's occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityColor {
    Green,
    Yellow,
    Orange,
    Red,
}

impl CapacityColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }

    /// Band for an unrounded occupancy percentage
    ///
    /// Each band is named after the threshold below it: reaching `green`
    /// yields yellow, reaching `yellow` yields orange, exceeding `orange`
    /// yields red.
    pub fn classify(percentage: f64, thresholds: &CapacityThresholds) -> Self {
        if percentage > thresholds.orange() {
            Self::Red
        } else if percentage >= thresholds.yellow() {
            Self::Orange
        } else if percentage >= thresholds.green() {
            Self::Yellow
        } else {
            Self::Green
        }
    }
}

/// Occupancy snapshot of one service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityStatus {
    /// Seats still free, never negative
    pub available: u32,
    /// Configured maximum capacity
    pub total: i32,
    /// Occupancy rounded to the nearest integer
    pub percentage: u32,
    pub color: CapacityColor,
}

/// Classify the reservations of one service on one day
///
/// The caller selects the day and service; cancelled reservations in the
/// input are ignored.
pub fn classify_capacity(
    reservations: &[Reservation],
    max_capacity: i32,
    thresholds: &CapacityThresholds,
) -> CapacityStatus {
    let occupied: u64 = reservations
        .iter()
        .filter(|r| r.counts_toward_occupancy())
        .map(|r| u64::from(r.num_guests))
        .sum();
    capacity_status(occupied, max_capacity, thresholds)
}

/// Classify an already summed guest count
pub fn capacity_status(
    occupied_guests: u64,
    max_capacity: i32,
    thresholds: &CapacityThresholds,
) -> CapacityStatus {
    let percentage = occupancy_percentage(occupied_guests, max_capacity);
    let available = (i64::from(max_capacity) - occupied_guests.min(i64::MAX as u64) as i64).max(0);

    CapacityStatus {
        available: u32::try_from(available).unwrap_or(u32::MAX),
        total: max_capacity,
        percentage: percentage.round() as u32,
        color: CapacityColor::classify(percentage, thresholds),
    }
}

/// Unrounded occupancy; 0 when capacity is zero or negative
pub fn occupancy_percentage(occupied_guests: u64, max_capacity: i32) -> f64 {
    if max_capacity > 0 {
        occupied_guests as f64 / f64::from(max_capacity) * 100.0
    } else {
        0.0
    }
}
