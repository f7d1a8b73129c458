//! Statistics screen report
//!
//! Everything the statistics dashboard renders for one restaurant and one
//! period, computed from a single reservation snapshot.

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{Reservation, RestaurantSettings, ServiceType};

use crate::daily::{DailyStats, daily_stats};
use crate::periods::StatsPeriod;
use crate::stats::{
    DaySeriesEntry, DistributionSlice, PeriodOccupancy, RangeStats, TopDay, WeekdayEntry,
    daily_series, period_occupancy, range_stats, top_days, weekday_profile,
};
use crate::summary::{ReservationSummary, reservation_summary};

// ============================================================================
// Report Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RestaurantInfo {
    pub id: String,
    pub name: String,
    pub max_capacity_lunch: i32,
    pub max_capacity_dinner: i32,
}

/// Full statistics report
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsReport {
    pub restaurant: RestaurantInfo,
    pub period: StatsPeriod,
    /// Day the report was computed for
    pub today: NaiveDate,
    pub overview: RangeStats,
    pub occupancy: PeriodOccupancy,
    pub service_distribution: Vec<DistributionSlice>,
    pub status_distribution: Vec<DistributionSlice>,
    pub daily_trend: Vec<DaySeriesEntry>,
    /// All-time, not limited to the period
    pub weekday_profile: Vec<WeekdayEntry>,
    /// All-time busiest days
    pub top_days: Vec<TopDay>,
    pub today_stats: DailyStats,
    pub summary: ReservationSummary,
}

// ============================================================================
// Builder
// ============================================================================

impl StatisticsReport {
    pub fn build(
        reservations: &[Reservation],
        settings: &RestaurantSettings,
        period: &StatsPeriod,
        today: NaiveDate,
        top_limit: usize,
    ) -> Self {
        tracing::debug!(
            restaurant_id = %settings.id,
            period = %period.key.as_str(),
            start = %period.start,
            end = %period.end,
            reservations = reservations.len(),
            "Building statistics report"
        );

        let max_lunch = settings.capacity_for(ServiceType::Lunch);
        let max_dinner = settings.capacity_for(ServiceType::Dinner);

        let overview = range_stats(reservations, period.start, period.end);
        let occupancy =
            period_occupancy(&overview, period.start, period.end, max_lunch, max_dinner);
        let todays: Vec<Reservation> = reservations
            .iter()
            .filter(|r| r.date == today)
            .cloned()
            .collect();

        let report = Self {
            restaurant: RestaurantInfo {
                id: settings.id.clone(),
                name: settings.name.clone(),
                max_capacity_lunch: settings.max_capacity_lunch,
                max_capacity_dinner: settings.max_capacity_dinner,
            },
            period: period.clone(),
            today,
            service_distribution: overview.service_distribution(),
            status_distribution: overview.status_distribution(),
            daily_trend: daily_series(reservations, period.start, period.end),
            weekday_profile: weekday_profile(reservations),
            top_days: top_days(reservations, top_limit),
            today_stats: daily_stats(&todays, max_lunch, max_dinner, &settings.thresholds),
            summary: reservation_summary(reservations, today),
            overview,
            occupancy,
        };

        tracing::debug!(
            total_reservations = report.overview.total_reservations,
            total_guests = report.overview.total_guests,
            occupancy_rate = report.occupancy.occupancy_rate,
            "Statistics report built"
        );
        report
    }
}
