use std::path::PathBuf;

use chrono_tz::Tz;

use crate::periods::PeriodKey;
use crate::utils::time::parse_timezone;

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | RESVO_TIMEZONE | Europe/Rome | IANA zone that defines "today" and calendar days |
/// | RESVO_SNAPSHOT_PATH | ./data/snapshot.json | JSON snapshot read by `resvo-report` |
/// | RESVO_RESTAURANT_ID | (first in snapshot) | Restaurant to report on |
/// | RESVO_STATS_PERIOD | month | week, month, 3months or 6months |
/// | RESVO_TOP_DAYS | 10 | Length of the busiest-days ranking |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | Write a daily rolling log file there instead of stderr |
/// | LOG_JSON | false | Emit JSON lines instead of text |
///
/// Timezone and period are kept as written and resolved by [`EngineConfig::tz`]
/// and [`EngineConfig::period_key`], so their fallbacks are logged once the
/// logger built from this same config is installed.
///
/// # Example
///
/// ```ignore
/// RESVO_STATS_PERIOD=3months RESVO_TIMEZONE=Europe/Madrid cargo run --bin resvo-report
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub timezone: String,
    pub snapshot_path: PathBuf,
    pub restaurant_id: Option<String>,
    pub stats_period: String,
    pub top_days: usize,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub log_json: bool,
}

pub const DEFAULT_TIMEZONE: &str = "Europe/Rome";
pub const DEFAULT_SNAPSHOT_PATH: &str = "./data/snapshot.json";
pub const DEFAULT_REPORT_TOP_DAYS: usize = 10;

impl EngineConfig {
    /// Load from environment variables, using defaults for anything unset
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            timezone: var("RESVO_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.into()),
            snapshot_path: var("RESVO_SNAPSHOT_PATH")
                .unwrap_or_else(|| DEFAULT_SNAPSHOT_PATH.into())
                .into(),
            restaurant_id: var("RESVO_RESTAURANT_ID"),
            stats_period: var("RESVO_STATS_PERIOD")
                .unwrap_or_else(|| PeriodKey::Month.as_str().into()),
            top_days: var("RESVO_TOP_DAYS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REPORT_TOP_DAYS),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR"),
            log_json: var("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Reference timezone; invalid names fall back to UTC with a warning
    pub fn tz(&self) -> Tz {
        parse_timezone(&self.timezone)
    }

    /// Reporting period; unknown keys fall back to month
    pub fn period_key(&self) -> PeriodKey {
        PeriodKey::from_key(&self.stats_period)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
