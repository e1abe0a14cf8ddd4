use serde::{Deserialize, Serialize};

use crate::model::{TrafficError, MINUTES_PER_DAY};
use crate::util::minute_clock;

/// the active time-of-day filter for traffic aggregation. modeled as a
/// tagged variant rather than a sentinel minute value so that "no filter"
/// can never collide with a real minute-of-day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type", content = "minute")]
pub enum TimeFilter {
    /// aggregate over the complete day
    Unfiltered,
    /// aggregate over a circular window centered on a minute-of-day
    CenteredAt(u16),
}

impl TimeFilter {
    /// constructs a centered filter, rejecting minutes outside [0, 1440).
    /// an out-of-range minute indicates a caller bug and is never wrapped.
    pub fn centered_at(minute: u32) -> Result<TimeFilter, TrafficError> {
        if minute as usize >= MINUTES_PER_DAY {
            return Err(TrafficError::MinuteOutOfRange(minute));
        }
        Ok(TimeFilter::CenteredAt(minute as u16))
    }

    /// confirms the filter minute is in range. deserialized filters bypass
    /// [`TimeFilter::centered_at`], so aggregation re-checks before use.
    pub fn validate(&self) -> Result<(), TrafficError> {
        match self {
            TimeFilter::Unfiltered => Ok(()),
            TimeFilter::CenteredAt(minute) if (*minute as usize) < MINUTES_PER_DAY => Ok(()),
            TimeFilter::CenteredAt(minute) => Err(TrafficError::MinuteOutOfRange(*minute as u32)),
        }
    }

    /// clock text for the UI control: None when unfiltered, otherwise the
    /// formatted center minute.
    pub fn label(&self) -> Result<Option<String>, TrafficError> {
        match self {
            TimeFilter::Unfiltered => Ok(None),
            TimeFilter::CenteredAt(minute) => minute_clock::format_clock(*minute).map(Some),
        }
    }
}

#[cfg(test)]
mod test {
    use super::TimeFilter;

    #[test]
    fn test_centered_at_accepts_valid_minutes() {
        assert_eq!(
            TimeFilter::centered_at(0).expect("should construct"),
            TimeFilter::CenteredAt(0)
        );
        assert_eq!(
            TimeFilter::centered_at(1439).expect("should construct"),
            TimeFilter::CenteredAt(1439)
        );
    }

    #[test]
    fn test_centered_at_rejects_out_of_range() {
        assert!(TimeFilter::centered_at(1440).is_err());
        assert!(TimeFilter::centered_at(10_000).is_err());
    }

    #[test]
    fn test_label() {
        assert_eq!(TimeFilter::Unfiltered.label().unwrap(), None);
        let label = TimeFilter::CenteredAt(600).label().unwrap();
        assert_eq!(label, Some(String::from("10:00 AM")));
    }

    #[test]
    fn test_serde_tagged_representation() {
        let json = serde_json::to_string(&TimeFilter::CenteredAt(485)).unwrap();
        assert_eq!(json, r#"{"type":"centered_at","minute":485}"#);
        let back: TimeFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TimeFilter::CenteredAt(485));
    }
}
