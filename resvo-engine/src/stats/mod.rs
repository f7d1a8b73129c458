//! Range statistics for the statistics screen
//!
//! Every function skips cancelled reservations.

mod range;
mod series;
mod top_days;
mod weekday;

pub use range::{DistributionSlice, PeriodOccupancy, RangeStats, period_occupancy, range_stats};
pub use series::{DaySeriesEntry, daily_series};
pub use top_days::{DEFAULT_TOP_DAYS, TopDay, top_days};
pub use weekday::{WeekdayEntry, weekday_profile};
