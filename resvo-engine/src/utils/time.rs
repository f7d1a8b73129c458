//! Calendar helpers in the restaurant's reference timezone
//!
//! Reservation dates are already calendar days; the only instant the engine
//! ever sees is "now", and it is resolved to a day through an explicit
//! [`BusinessCalendar`] instead of the host clock's local zone.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use chrono_tz::Tz;

/// Reference timezone plus the instant treated as "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessCalendar {
    tz: Tz,
    now: DateTime<Utc>,
}

impl BusinessCalendar {
    /// Calendar pinned to an explicit instant
    pub fn new(tz: Tz, now: DateTime<Utc>) -> Self {
        Self { tz, now }
    }

    /// Calendar evaluated at the current system time
    pub fn current(tz: Tz) -> Self {
        Self::new(tz, Utc::now())
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Today's calendar day in the reference timezone
    pub fn today(&self) -> NaiveDate {
        self.local_date(self.now)
    }

    /// Calendar day of an arbitrary instant in the reference timezone
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }
}

/// Parse an IANA timezone name, falling back to UTC
pub fn parse_timezone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to parse timezone '{}': {}, falling back to UTC",
            name,
            e
        );
        Tz::UTC
    })
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Sunday of the week containing `date`
pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date) + Duration::days(6)
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let first = month_start(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

/// First day of the month `months` before the one containing `date`
pub fn months_back_start(date: NaiveDate, months: u32) -> NaiveDate {
    let first = month_start(date);
    first.checked_sub_months(Months::new(months)).unwrap_or(first)
}

/// Number of calendar days in `[start, end]`, 0 when `start > end`
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }
    ((end - start).num_days() + 1) as u32
}

/// Whether the day falls on Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    date.weekday().num_days_from_monday() >= 5
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_today_follows_reference_timezone() {
        let now = Utc.with_ymd_and_hms(2024, 5, 3, 23, 30, 0).unwrap();
        assert_eq!(BusinessCalendar::new(Tz::UTC, now).today(), d(2024, 5, 3));
        assert_eq!(
            BusinessCalendar::new(Tz::Europe__Rome, now).today(),
            d(2024, 5, 4)
        );
    }

    #[test]
    fn test_week_bounds() {
        // 2024-05-08 is a Wednesday
        assert_eq!(week_start(d(2024, 5, 8)), d(2024, 5, 6));
        assert_eq!(week_end(d(2024, 5, 8)), d(2024, 5, 12));
        // Sunday belongs to the week that started the previous Monday
        assert_eq!(week_start(d(2024, 5, 12)), d(2024, 5, 6));
        assert_eq!(week_start(d(2024, 5, 6)), d(2024, 5, 6));
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_start(d(2024, 2, 17)), d(2024, 2, 1));
        assert_eq!(month_end(d(2024, 2, 17)), d(2024, 2, 29));
        assert_eq!(month_end(d(2023, 12, 5)), d(2023, 12, 31));
        assert_eq!(months_back_start(d(2024, 1, 20), 2), d(2023, 11, 1));
        assert_eq!(months_back_start(d(2024, 6, 30), 5), d(2024, 1, 1));
    }

    #[test]
    fn test_days_inclusive() {
        assert_eq!(days_inclusive(d(2024, 5, 1), d(2024, 5, 31)), 31);
        assert_eq!(days_inclusive(d(2024, 5, 1), d(2024, 5, 1)), 1);
        assert_eq!(days_inclusive(d(2024, 5, 2), d(2024, 5, 1)), 0);
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(d(2024, 5, 11)));
        assert!(is_weekend(d(2024, 5, 12)));
        assert!(!is_weekend(d(2024, 5, 10)));
    }

    #[test]
    fn test_parse_timezone_fallback() {
        assert_eq!(parse_timezone("Europe/Rome"), Tz::Europe__Rome);
        assert_eq!(parse_timezone("Mars/Olympus"), Tz::UTC);
    }
}
