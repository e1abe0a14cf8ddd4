use chrono::{NaiveDateTime, NaiveTime, Timelike};

use crate::model::{TrafficError, MINUTES_PER_DAY};

/// format used when rendering a minute-of-day as clock text, such as "8:05 AM".
pub const CLOCK_FORMAT: &str = "%-I:%M %p";

/// maps a timestamp to its minute-of-day in [0, 1440), taking only the
/// wall-clock component and ignoring the date and any seconds precision.
pub fn minute_of_day(datetime: &NaiveDateTime) -> u16 {
    (datetime.hour() * 60 + datetime.minute()) as u16
}

/// renders a minute-of-day as short clock text.
///
/// # Arguments
///
/// * `minute` - minute-of-day to render, must be in [0, 1440)
///
/// # Returns
///
/// the formatted clock string, or [`TrafficError::MinuteOutOfRange`] when the
/// minute is out of range. out-of-range input is always an error here; it is
/// never wrapped back into range, since it indicates a caller bug.
pub fn format_clock(minute: u16) -> Result<String, TrafficError> {
    if minute as usize >= MINUTES_PER_DAY {
        return Err(TrafficError::MinuteOutOfRange(minute as u32));
    }
    let time = NaiveTime::from_hms_opt(minute as u32 / 60, minute as u32 % 60, 0)
        .ok_or(TrafficError::MinuteOutOfRange(minute as u32))?;
    Ok(time.format(CLOCK_FORMAT).to_string())
}

#[cfg(test)]
mod test {
    use super::{format_clock, minute_of_day};
    use chrono::{NaiveDate, NaiveDateTime};

    fn datetime_at_minute(minute: u16) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .expect("test invariant failed: invalid date")
            .and_hms_opt(minute as u32 / 60, minute as u32 % 60, 31)
            .expect("test invariant failed: invalid time")
    }

    #[test]
    fn test_minute_of_day_ignores_date_and_seconds() {
        let a = datetime_at_minute(485);
        let b = NaiveDate::from_ymd_opt(2019, 12, 31)
            .unwrap()
            .and_hms_opt(8, 5, 0)
            .unwrap();
        assert_eq!(minute_of_day(&a), 485);
        assert_eq!(minute_of_day(&b), 485);
    }

    #[test]
    fn test_minute_of_day_roundtrip_all_minutes() {
        for minute in 0..1440u16 {
            assert_eq!(minute_of_day(&datetime_at_minute(minute)), minute);
        }
    }

    #[test]
    fn test_format_clock_morning() {
        assert_eq!(format_clock(485).unwrap(), "8:05 AM");
    }

    #[test]
    fn test_format_clock_midnight_and_noon() {
        assert_eq!(format_clock(0).unwrap(), "12:00 AM");
        assert_eq!(format_clock(720).unwrap(), "12:00 PM");
        assert_eq!(format_clock(1439).unwrap(), "11:59 PM");
    }

    #[test]
    fn test_format_clock_rejects_out_of_range() {
        let result = format_clock(1440);
        assert!(result.is_err(), "minute 1440 should not format");
    }
}
