//! Day-of-week performance profile

use chrono::{Datelike, Weekday};
use serde::Serialize;
use shared::models::{Reservation, ServiceType};

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayEntry {
    pub weekday: Weekday,
    /// Short English name ("Mon")
    pub label: &'static str,
    pub lunch: u32,
    pub dinner: u32,
    pub total: u32,
    pub guests: u32,
}

/// Seven entries, Monday first, over every non-cancelled reservation
///
/// Not limited to a date range.
pub fn weekday_profile(reservations: &[Reservation]) -> Vec<WeekdayEntry> {
    let mut profile: Vec<WeekdayEntry> = WEEKDAYS
        .iter()
        .map(|&weekday| WeekdayEntry {
            weekday,
            label: short_name(weekday),
            lunch: 0,
            dinner: 0,
            total: 0,
            guests: 0,
        })
        .collect();

    for r in reservations.iter().filter(|r| r.counts_toward_occupancy()) {
        let entry = &mut profile[r.date.weekday().num_days_from_monday() as usize];
        entry.total += 1;
        entry.guests = entry.guests.saturating_add(r.num_guests);
        match r.service_type {
            ServiceType::Lunch => entry.lunch += 1,
            ServiceType::Dinner => entry.dinner += 1,
        }
    }
    profile
}

fn short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
