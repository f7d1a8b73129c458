//! Header counters of the reservation list

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{Reservation, ReservationStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReservationSummary {
    /// Every record, cancelled included
    pub total: u32,
    pub today: u32,
    /// From today on, still open
    pub upcoming: u32,
    pub pending: u32,
}

pub fn reservation_summary(reservations: &[Reservation], today: NaiveDate) -> ReservationSummary {
    reservations
        .iter()
        .fold(ReservationSummary::default(), |mut summary, r| {
            summary.total += 1;
            if r.date == today && r.counts_toward_occupancy() {
                summary.today += 1;
            }
            if r.date >= today
                && !matches!(r.status, ReservationStatus::Cancelled | ReservationStatus::Completed)
            {
                summary.upcoming += 1;
            }
            if r.status == ReservationStatus::Pending {
                summary.pending += 1;
            }
            summary
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{confirmed, day, with_status};
    use shared::models::ServiceType;

    #[test]
    fn test_empty_summary() {
        assert_eq!(reservation_summary(&[], day("2024-05-08")), ReservationSummary::default());
    }

    #[test]
    fn test_summary_counts() {
        let reservations = vec![
            confirmed("2024-05-08", ServiceType::Lunch, 2),
            with_status(
                confirmed("2024-05-08", ServiceType::Dinner, 4),
                ReservationStatus::Cancelled,
            ),
            with_status(
                confirmed("2024-05-08", ServiceType::Dinner, 4),
                ReservationStatus::Completed,
            ),
            with_status(
                confirmed("2024-05-09", ServiceType::Dinner, 3),
                ReservationStatus::Pending,
            ),
            confirmed("2024-05-07", ServiceType::Dinner, 2),
            with_status(confirmed("2024-05-01", ServiceType::Lunch, 2), ReservationStatus::Pending),
        ];
        let summary = reservation_summary(&reservations, day("2024-05-08"));

        assert_eq!(summary.total, 6);
        // completed still happened today, cancelled did not
        assert_eq!(summary.today, 2);
        assert_eq!(summary.upcoming, 2);
        // stale pending rows still count
        assert_eq!(summary.pending, 2);
    }
}
