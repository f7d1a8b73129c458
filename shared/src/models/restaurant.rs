//! Restaurant configuration model

use serde::{Deserialize, Serialize};

use super::reservation::ServiceType;
use crate::error::{AppError, AppResult};

pub const DEFAULT_GREEN_THRESHOLD: f64 = 60.0;
pub const DEFAULT_YELLOW_THRESHOLD: f64 = 80.0;
pub const DEFAULT_ORANGE_THRESHOLD: f64 = 99.0;

/// Default booking slot length, minutes
pub const DEFAULT_TABLE_DURATION: u32 = 120;

/// Occupancy percentages delimiting the capacity colour bands
///
/// Always satisfies `green <= yellow <= orange`, each within [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct CapacityThresholds {
    green: f64,
    yellow: f64,
    orange: f64,
}

#[derive(Deserialize)]
struct RawThresholds {
    green: f64,
    yellow: f64,
    orange: f64,
}

impl TryFrom<RawThresholds> for CapacityThresholds {
    type Error = AppError;

    fn try_from(raw: RawThresholds) -> Result<Self, Self::Error> {
        Self::new(raw.green, raw.yellow, raw.orange)
    }
}

impl CapacityThresholds {
    /// Build validated thresholds
    ///
    /// Fails with `InvalidConfiguration` when a value is outside [0, 100]
    /// or the three are not ordered.
    pub fn new(green: f64, yellow: f64, orange: f64) -> AppResult<Self> {
        for (name, value) in [("green", green), ("yellow", yellow), ("orange", orange)] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(AppError::invalid_configuration(format!(
                    "{} threshold {} is outside 0..=100",
                    name, value
                ))
                .with_detail("threshold", name));
            }
        }
        if green > yellow || yellow > orange {
            return Err(AppError::invalid_configuration(format!(
                "thresholds must satisfy green <= yellow <= orange (got {}/{}/{})",
                green, yellow, orange
            )));
        }
        Ok(Self {
            green,
            yellow,
            orange,
        })
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn yellow(&self) -> f64 {
        self.yellow
    }

    pub fn orange(&self) -> f64 {
        self.orange
    }
}

impl Default for CapacityThresholds {
    fn default() -> Self {
        Self {
            green: DEFAULT_GREEN_THRESHOLD,
            yellow: DEFAULT_YELLOW_THRESHOLD,
            orange: DEFAULT_ORANGE_THRESHOLD,
        }
    }
}

/// Restaurant settings consumed by the capacity and statistics engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSettings {
    pub id: String,
    pub name: String,
    pub max_capacity_lunch: i32,
    pub max_capacity_dinner: i32,
    /// Minutes a table is held per booking
    pub default_table_duration: u32,
    pub thresholds: CapacityThresholds,
}

impl RestaurantSettings {
    /// Seat capacity of a service
    pub fn capacity_for(&self, service: ServiceType) -> i32 {
        match service {
            ServiceType::Lunch => self.max_capacity_lunch,
            ServiceType::Dinner => self.max_capacity_dinner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_default_thresholds() {
        let t = CapacityThresholds::default();
        assert_eq!((t.green(), t.yellow(), t.orange()), (60.0, 80.0, 99.0));
    }

    #[test]
    fn test_thresholds_reject_bad_ordering() {
        let err = CapacityThresholds::new(85.0, 80.0, 99.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfiguration);

        let err = CapacityThresholds::new(60.0, 80.0, 70.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfiguration);
    }

    #[test]
    fn test_thresholds_reject_out_of_range() {
        let err = CapacityThresholds::new(-1.0, 80.0, 99.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfiguration);
        assert_eq!(err.detail_str("threshold"), Some("green"));

        assert!(CapacityThresholds::new(60.0, 80.0, 101.0).is_err());
        assert!(CapacityThresholds::new(f64::NAN, 80.0, 99.0).is_err());
    }

    #[test]
    fn test_thresholds_accept_equal_bounds() {
        let t = CapacityThresholds::new(50.0, 50.0, 50.0).unwrap();
        assert_eq!(t.yellow(), 50.0);
    }

    #[test]
    fn test_thresholds_deserialize_validates() {
        let ok: CapacityThresholds =
            serde_json::from_str(r#"{"green":50,"yellow":70,"orange":95}"#).unwrap();
        assert_eq!(ok.orange(), 95.0);

        let bad =
            serde_json::from_str::<CapacityThresholds>(r#"{"green":90,"yellow":70,"orange":95}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_capacity_for_service() {
        let settings = RestaurantSettings {
            id: "r-1".into(),
            name: "Trattoria".into(),
            max_capacity_lunch: 80,
            max_capacity_dinner: 100,
            default_table_duration: DEFAULT_TABLE_DURATION,
            thresholds: CapacityThresholds::default(),
        };
        assert_eq!(settings.capacity_for(ServiceType::Lunch), 80);
        assert_eq!(settings.capacity_for(ServiceType::Dinner), 100);
    }
}
