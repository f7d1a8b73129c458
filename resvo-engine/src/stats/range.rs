//! Period totals and breakdowns

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{Reservation, ReservationStatus, ServiceType};

use crate::utils::time::days_inclusive;

/// Totals of the non-cancelled reservations inside a date range
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RangeStats {
    pub total_reservations: u32,
    pub total_guests: u32,
    /// Rounded to one decimal, 0 when there are no reservations
    pub avg_guests_per_reservation: f64,
    pub lunch_count: u32,
    pub dinner_count: u32,
    pub lunch_guests: u32,
    pub dinner_guests: u32,
    pub confirmed_count: u32,
    pub completed_count: u32,
    pub pending_count: u32,
}

/// One slice of a pie chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionSlice {
    pub key: &'static str,
    pub value: u32,
}

impl RangeStats {
    /// Lunch vs dinner reservation counts
    pub fn service_distribution(&self) -> Vec<DistributionSlice> {
        vec![
            DistributionSlice {
                key: ServiceType::Lunch.as_str(),
                value: self.lunch_count,
            },
            DistributionSlice {
                key: ServiceType::Dinner.as_str(),
                value: self.dinner_count,
            },
        ]
    }

    /// Confirmed, completed and pending counts
    pub fn status_distribution(&self) -> Vec<DistributionSlice> {
        vec![
            DistributionSlice {
                key: ReservationStatus::Confirmed.as_str(),
                value: self.confirmed_count,
            },
            DistributionSlice {
                key: ReservationStatus::Completed.as_str(),
                value: self.completed_count,
            },
            DistributionSlice {
                key: ReservationStatus::Pending.as_str(),
                value: self.pending_count,
            },
        ]
    }
}

/// Aggregate over `start <= date <= end`, skipping cancelled reservations
pub fn range_stats(reservations: &[Reservation], start: NaiveDate, end: NaiveDate) -> RangeStats {
    let mut stats = RangeStats::default();

    for r in reservations
        .iter()
        .filter(|r| r.counts_toward_occupancy() && r.date >= start && r.date <= end)
    {
        stats.total_reservations += 1;
        stats.total_guests = stats.total_guests.saturating_add(r.num_guests);

        match r.service_type {
            ServiceType::Lunch => {
                stats.lunch_count += 1;
                stats.lunch_guests = stats.lunch_guests.saturating_add(r.num_guests);
            }
            ServiceType::Dinner => {
                stats.dinner_count += 1;
                stats.dinner_guests = stats.dinner_guests.saturating_add(r.num_guests);
            }
        }

        match r.status {
            ReservationStatus::Confirmed => stats.confirmed_count += 1,
            ReservationStatus::Completed => stats.completed_count += 1,
            ReservationStatus::Pending => stats.pending_count += 1,
            ReservationStatus::Cancelled => {}
        }
    }

    if stats.total_reservations > 0 {
        stats.avg_guests_per_reservation =
            round_one_decimal(f64::from(stats.total_guests) / f64::from(stats.total_reservations));
    }
    stats
}

/// Seat utilisation over a whole period
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PeriodOccupancy {
    /// Calendar days in the period
    pub days: u32,
    /// Rounded to one decimal
    pub avg_reservations_per_day: f64,
    /// Guests over the seats offered by every service of every day, rounded percent
    pub occupancy_rate: u32,
}

pub fn period_occupancy(
    stats: &RangeStats,
    start: NaiveDate,
    end: NaiveDate,
    max_capacity_lunch: i32,
    max_capacity_dinner: i32,
) -> PeriodOccupancy {
    let days = days_inclusive(start, end);
    if days == 0 {
        return PeriodOccupancy::default();
    }

    let seats_per_day =
        i64::from(max_capacity_lunch.max(0)) + i64::from(max_capacity_dinner.max(0));
    let offered = seats_per_day * i64::from(days);
    let occupancy_rate = if offered > 0 {
        (f64::from(stats.total_guests) / offered as f64 * 100.0).round() as u32
    } else {
        0
    };

    PeriodOccupancy {
        days,
        avg_reservations_per_day: round_one_decimal(
            f64::from(stats.total_reservations) / f64::from(days),
        ),
        occupancy_rate,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
