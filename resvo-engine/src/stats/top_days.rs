//! Busiest-days ranking

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::Reservation;

/// Ranking length used when the caller has no preference
pub const DEFAULT_TOP_DAYS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopDay {
    pub date: NaiveDate,
    pub count: u32,
    pub guests: u32,
}

/// At most `limit` days ordered by reservation count, highest first
///
/// Days with equal counts keep the order in which they were first seen.
pub fn top_days(reservations: &[Reservation], limit: usize) -> Vec<TopDay> {
    let mut days: Vec<TopDay> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for r in reservations.iter().filter(|r| r.counts_toward_occupancy()) {
        let i = *index.entry(r.date).or_insert_with(|| {
            days.push(TopDay {
                date: r.date,
                count: 0,
                guests: 0,
            });
            days.len() - 1
        });
        days[i].count += 1;
        days[i].guests = days[i].guests.saturating_add(r.num_guests);
    }

    // stable: ties stay in discovery order
    days.sort_by(|a, b| b.count.cmp(&a.count));
    days.truncate(limit);
    days
}
