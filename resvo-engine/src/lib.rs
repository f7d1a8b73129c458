//! Resvo Engine - reservation capacity and statistics
//!
//! # Overview
//!
//! Pure calculations over a snapshot of reservations:
//!
//! - **Capacity** (`capacity`): remaining seats, occupancy percentage and colour band
//! - **Daily** (`daily`): lunch/dinner breakdown and the day detail view
//! - **Statistics** (`stats`): range totals, dense day series, weekday profile, busiest days
//! - **Periods** (`periods`): the named reporting ranges
//! - **Filter** (`filter`): reservation list search, filters and ordering
//!
//! Loading data goes through [`source::ReservationSource`]; the calculation
//! modules never perform I/O and keep no state between calls.
//!
//! # Module layout
//!
//! ```text
//! resvo-engine/src/
//! ├── core/          # configuration
//! ├── utils/         # calendar helpers, logging
//! ├── source/        # reservation sources (memory, JSON snapshot)
//! ├── stats/         # range statistics
//! ├── capacity.rs
//! ├── daily.rs
//! ├── periods.rs
//! ├── filter.rs
//! ├── summary.rs
//! └── report.rs      # statistics screen composition
//! ```

pub mod capacity;
pub mod core;
pub mod daily;
pub mod filter;
pub mod periods;
pub mod report;
pub mod source;
pub mod stats;
pub mod summary;
pub mod utils;

#[cfg(test)]
mod fixtures;

// Re-export public types
pub use capacity::{CapacityColor, CapacityStatus, capacity_status, classify_capacity};
pub use crate::core::EngineConfig;
pub use daily::{
    DailyStats, DayDetail, ServiceStats, daily_stats, day_detail,
    reservations_for_date_and_service,
};
pub use filter::{DateFilter, ReservationFilter, Selection, filter_reservations};
pub use periods::{PeriodKey, StatsPeriod, period_catalog, select_period};
pub use report::StatisticsReport;
pub use source::{JsonSnapshotSource, MemorySource, ReservationSource};
pub use summary::{ReservationSummary, reservation_summary};
pub use utils::BusinessCalendar;

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read [`EngineConfig`] and initialize logging from it
pub fn setup_environment() -> anyhow::Result<EngineConfig> {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        return Err(anyhow::anyhow!("Failed to load .env: {}", e));
    }

    let config = EngineConfig::from_env();
    init_logger_with_file(
        Some(config.log_level.as_str()),
        config.log_json,
        config.log_dir.as_deref(),
    );
    Ok(config)
}
