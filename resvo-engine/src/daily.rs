//! Per-day and per-service aggregation for the calendar day detail

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{CapacityThresholds, Reservation, RestaurantSettings, ServiceType};

use crate::capacity::{CapacityStatus, capacity_status};

/// Reservations, guests and occupancy of one service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceStats {
    pub reservations: u32,
    pub guests: u32,
    pub capacity: CapacityStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DayTotals {
    pub reservations: u32,
    pub guests: u32,
}

/// Lunch/dinner breakdown of a set of reservations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyStats {
    pub lunch: ServiceStats,
    pub dinner: ServiceStats,
    pub total: DayTotals,
}

impl DailyStats {
    pub fn service(&self, service: ServiceType) -> &ServiceStats {
        match service {
            ServiceType::Lunch => &self.lunch,
            ServiceType::Dinner => &self.dinner,
        }
    }
}

/// Partition by service, ignoring cancelled reservations
///
/// The input is expected to hold a single day; it is not filtered by date.
pub fn daily_stats(
    reservations: &[Reservation],
    max_capacity_lunch: i32,
    max_capacity_dinner: i32,
    thresholds: &CapacityThresholds,
) -> DailyStats {
    stats_where(reservations, |_| true, max_capacity_lunch, max_capacity_dinner, thresholds)
}

fn stats_where(
    reservations: &[Reservation],
    in_scope: impl Fn(&Reservation) -> bool,
    max_capacity_lunch: i32,
    max_capacity_dinner: i32,
    thresholds: &CapacityThresholds,
) -> DailyStats {
    let in_scope = &in_scope;
    let scoped = || reservations.iter().filter(move |r| in_scope(r));
    let lunch = service_stats(scoped(), ServiceType::Lunch, max_capacity_lunch, thresholds);
    let dinner = service_stats(scoped(), ServiceType::Dinner, max_capacity_dinner, thresholds);

    DailyStats {
        total: DayTotals {
            reservations: lunch.reservations + dinner.reservations,
            guests: lunch.guests.saturating_add(dinner.guests),
        },
        lunch,
        dinner,
    }
}

fn service_stats<'r>(
    reservations: impl Iterator<Item = &'r Reservation>,
    service: ServiceType,
    max_capacity: i32,
    thresholds: &CapacityThresholds,
) -> ServiceStats {
    let (count, guests) = reservations
        .filter(|r| r.service_type == service && r.counts_toward_occupancy())
        .fold((0u32, 0u32), |(count, guests), r| {
            (count + 1, guests.saturating_add(r.num_guests))
        });

    ServiceStats {
        reservations: count,
        guests,
        capacity: capacity_status(u64::from(guests), max_capacity, thresholds),
    }
}

/// Non-cancelled reservations of one service on one calendar day
pub fn reservations_for_date_and_service(
    reservations: &[Reservation],
    date: NaiveDate,
    service: ServiceType,
) -> Vec<&Reservation> {
    reservations
        .iter()
        .filter(|r| r.date == date && r.service_type == service && r.counts_toward_occupancy())
        .collect()
}

/// Everything the calendar's day detail panel shows
#[derive(Debug, Clone, Serialize)]
pub struct DayDetail<'a> {
    pub date: NaiveDate,
    pub service: ServiceType,
    /// Both services of the day
    pub stats: DailyStats,
    /// Stats of the selected service
    pub service_stats: ServiceStats,
    /// Selected service's bookings ordered by time
    pub reservations: Vec<&'a Reservation>,
}

pub fn day_detail<'a>(
    reservations: &'a [Reservation],
    date: NaiveDate,
    service: ServiceType,
    settings: &RestaurantSettings,
) -> DayDetail<'a> {
    let stats = stats_where(
        reservations,
        |r| r.date == date,
        settings.capacity_for(ServiceType::Lunch),
        settings.capacity_for(ServiceType::Dinner),
        &settings.thresholds,
    );

    let mut booked = reservations_for_date_and_service(reservations, date, service);
    booked.sort_by(|a, b| a.time.cmp(&b.time));

    DayDetail {
        date,
        service,
        stats,
        service_stats: *stats.service(service),
        reservations: booked,
    }
}
