use serde::{Deserialize, Serialize};

use crate::model::{TrafficError, MINUTES_PER_DAY};

/// tuning constants for window selection and the derived radius scale.
/// the defaults preserve the values the visualization was designed around:
/// a window reaching one hour to each side of the selected minute, and a
/// wider, lifted radius range in filtered mode so the smaller filtered
/// counts stay visible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficConfig {
    /// minutes covered on each side of the window center
    pub half_width_minutes: u16,
    /// radius output range [min, max] when aggregating the whole day
    pub unfiltered_radius_range: (f64, f64),
    /// radius output range [min, max] when a time filter is active
    pub filtered_radius_range: (f64, f64),
}

impl Default for TrafficConfig {
    fn default() -> Self {
        TrafficConfig {
            half_width_minutes: 60,
            unfiltered_radius_range: (0.0, 25.0),
            filtered_radius_range: (3.0, 50.0),
        }
    }
}

impl TrafficConfig {
    pub fn validate(&self) -> Result<(), TrafficError> {
        if self.half_width_minutes == 0 || self.half_width_minutes as usize >= MINUTES_PER_DAY / 2 {
            return Err(TrafficError::InvalidConfig(format!(
                "half_width_minutes must be in [1, {}), found {}",
                MINUTES_PER_DAY / 2,
                self.half_width_minutes
            )));
        }
        for (label, (min, max)) in [
            ("unfiltered_radius_range", self.unfiltered_radius_range),
            ("filtered_radius_range", self.filtered_radius_range),
        ] {
            if min < 0.0 || max < min {
                return Err(TrafficError::InvalidConfig(format!(
                    "{label} must be an ascending non-negative pair, found ({min}, {max})"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::TrafficConfig;

    #[test]
    fn test_default_is_valid() {
        TrafficConfig::default().validate().expect("should be valid");
    }

    #[test]
    fn test_rejects_zero_half_width() {
        let config = TrafficConfig {
            half_width_minutes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_half_width_spanning_full_day() {
        let config = TrafficConfig {
            half_width_minutes: 720,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_radius_range() {
        let config = TrafficConfig {
            filtered_radius_range: (50.0, 3.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
