//! Day-by-day series for the trend chart

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{Reservation, ServiceType};

/// Totals of one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySeriesEntry {
    pub date: NaiveDate,
    /// `dd/MM` axis label
    pub label: String,
    pub lunch: u32,
    pub dinner: u32,
    pub total: u32,
    pub guests: u32,
    pub lunch_guests: u32,
    pub dinner_guests: u32,
}

impl DaySeriesEntry {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            label: date.format("%d/%m").to_string(),
            lunch: 0,
            dinner: 0,
            total: 0,
            guests: 0,
            lunch_guests: 0,
            dinner_guests: 0,
        }
    }

    fn add(&mut self, r: &Reservation) {
        self.total += 1;
        self.guests = self.guests.saturating_add(r.num_guests);
        match r.service_type {
            ServiceType::Lunch => {
                self.lunch += 1;
                self.lunch_guests = self.lunch_guests.saturating_add(r.num_guests);
            }
            ServiceType::Dinner => {
                self.dinner += 1;
                self.dinner_guests = self.dinner_guests.saturating_add(r.num_guests);
            }
        }
    }
}

/// One entry per day of `[start, end]`, ascending and without gaps
///
/// Days without bookings produce zeroed entries. Returns an empty series
/// when `start > end`.
pub fn daily_series(
    reservations: &[Reservation],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DaySeriesEntry> {
    let mut series: Vec<DaySeriesEntry> = start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(DaySeriesEntry::empty)
        .collect();

    let index: HashMap<NaiveDate, usize> = series
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.date, i))
        .collect();

    for r in reservations.iter().filter(|r| r.counts_toward_occupancy()) {
        if let Some(&i) = index.get(&r.date) {
            series[i].add(r);
        }
    }
    series
}
