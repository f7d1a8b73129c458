//! Named reporting periods
//!
//! Ranges are evaluated against "today" at call time; the catalog is never
//! stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::time::{month_end, month_start, months_back_start, week_end, week_start};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodKey {
    #[serde(rename = "week")]
    Week,
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
}

impl PeriodKey {
    pub const ALL: [PeriodKey; 4] = [
        PeriodKey::Week,
        PeriodKey::Month,
        PeriodKey::ThreeMonths,
        PeriodKey::SixMonths,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::ThreeMonths => "3months",
            Self::SixMonths => "6months",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Week => "Last Week",
            Self::Month => "Last Month",
            Self::ThreeMonths => "Last 3 Months",
            Self::SixMonths => "Last 6 Months",
        }
    }

    /// Unknown keys resolve to [`PeriodKey::Month`]
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == key)
            .unwrap_or_else(|| {
                tracing::debug!(key = %key, "Unknown stats period, using month");
                Self::Month
            })
    }

    /// Inclusive `(start, end)` relative to `today`
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Self::Week => (week_start(today), week_end(today)),
            Self::Month => (month_start(today), month_end(today)),
            Self::ThreeMonths => (months_back_start(today, 2), month_end(today)),
            Self::SixMonths => (months_back_start(today, 5), month_end(today)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsPeriod {
    pub label: &'static str,
    pub key: PeriodKey,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StatsPeriod {
    pub fn new(key: PeriodKey, today: NaiveDate) -> Self {
        let (start, end) = key.bounds(today);
        Self {
            label: key.label(),
            key,
            start,
            end,
        }
    }
}

/// Week, month, 3 months, 6 months, in that order
pub fn period_catalog(today: NaiveDate) -> Vec<StatsPeriod> {
    PeriodKey::ALL
        .into_iter()
        .map(|key| StatsPeriod::new(key, today))
        .collect()
}

/// Period for a wire key, falling back to the current month
pub fn select_period(key: &str, today: NaiveDate) -> StatsPeriod {
    StatsPeriod::new(PeriodKey::from_key(key), today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::day;

    #[test]
    fn test_catalog_order_and_labels() {
        let catalog = period_catalog(day("2024-05-08"));
        let keys: Vec<&str> = catalog.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["week", "month", "3months", "6months"]);
        assert_eq!(catalog[0].label, "Last Week");
        assert_eq!(catalog[3].label, "Last 6 Months");
    }

    #[test]
    fn test_period_bounds() {
        // Wednesday
        let today = day("2024-05-08");
        let catalog = period_catalog(today);

        assert_eq!((catalog[0].start, catalog[0].end), (day("2024-05-06"), day("2024-05-12")));
        assert_eq!((catalog[1].start, catalog[1].end), (day("2024-05-01"), day("2024-05-31")));
        assert_eq!((catalog[2].start, catalog[2].end), (day("2024-03-01"), day("2024-05-31")));
        assert_eq!((catalog[3].start, catalog[3].end), (day("2023-12-01"), day("2024-05-31")));
    }

    #[test]
    fn test_period_bounds_cross_year() {
        let period = select_period("3months", day("2024-01-15"));
        assert_eq!((period.start, period.end), (day("2023-11-01"), day("2024-01-31")));
    }

    #[test]
    fn test_unknown_key_falls_back_to_month() {
        let period = select_period("fortnight", day("2024-02-10"));
        assert_eq!(period.key, PeriodKey::Month);
        assert_eq!((period.start, period.end), (day("2024-02-01"), day("2024-02-29")));
    }

    #[test]
    fn test_key_serde() {
        assert_eq!(serde_json::to_string(&PeriodKey::ThreeMonths).unwrap(), "\"3months\"");
        let key: PeriodKey = serde_json::from_str("\"6months\"").unwrap();
        assert_eq!(key, PeriodKey::SixMonths);
    }
}
