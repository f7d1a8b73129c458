//! Reservation list filtering and ordering

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::models::{Reservation, ReservationStatus, ServiceType};
use shared::{AppError, AppResult};

use crate::utils::time::{is_weekend, week_end, week_start};

/// Either every value, or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr<Err = AppError>> FromStr for Selection<T> {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Relative date bucket of the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilter {
    Today,
    Tomorrow,
    /// Any Saturday or Sunday, not only the current weekend
    Weekend,
    /// Monday-start week containing today
    Week,
    /// Calendar month containing today
    Month,
    #[default]
    All,
}

impl DateFilter {
    pub fn matches(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::Today => date == today,
            Self::Tomorrow => Some(date) == today.succ_opt(),
            Self::Weekend => is_weekend(date),
            Self::Week => date >= week_start(today) && date <= week_end(today),
            Self::Month => date.year() == today.year() && date.month() == today.month(),
            Self::All => true,
        }
    }
}

impl FromStr for DateFilter {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s {
            "today" => Ok(Self::Today),
            "tomorrow" => Ok(Self::Tomorrow),
            "weekend" => Ok(Self::Weekend),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "all" => Ok(Self::All),
            other => Err(AppError::validation(format!("Unknown date filter: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    pub search: String,
    pub service: Selection<ServiceType>,
    pub status: Selection<ReservationStatus>,
    pub date: DateFilter,
}

impl ReservationFilter {
    pub fn matches(&self, r: &Reservation, today: NaiveDate) -> bool {
        self.service.matches(&r.service_type)
            && self.status.matches(&r.status)
            && self.date.matches(r.date, today)
            && matches_search(r, &self.search)
    }
}

/// Apply the filter, then order by date and time
///
/// `today` is the current calendar day in the restaurant's timezone
/// (see [`crate::utils::time::BusinessCalendar::today`]). The sort is
/// stable: equal date and time keep the input order.
pub fn filter_reservations<'a>(
    reservations: &'a [Reservation],
    filter: &ReservationFilter,
    today: NaiveDate,
) -> Vec<&'a Reservation> {
    let mut matched: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| filter.matches(r, today))
        .collect();
    matched.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
    matched
}

fn matches_search(r: &Reservation, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();

    if r.customer_name.to_lowercase().contains(&needle) {
        return true;
    }
    if r.customer_phone.contains(query) {
        return true;
    }
    let query_digits = digits(query);
    if !query_digits.is_empty() && digits(&r.customer_phone).contains(&query_digits) {
        return true;
    }
    r.customer_email
        .as_deref()
        .is_some_and(|email| email.to_lowercase().contains(&needle))
}

fn digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}
