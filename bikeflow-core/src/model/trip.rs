use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::util::datetime_codec::deserialize_naive_datetime;
use crate::util::minute_clock;

/// record type storing a single bicycle trip between two stations.
/// deserializes directly from trip dataset rows; columns not listed
/// here are ignored.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TripRecord {
    #[serde(alias = "ride_id")]
    pub trip_id: String,
    pub start_station_id: String,
    pub end_station_id: String,
    #[serde(deserialize_with = "deserialize_naive_datetime")]
    pub started_at: NaiveDateTime,
    #[serde(deserialize_with = "deserialize_naive_datetime")]
    pub ended_at: NaiveDateTime,
}

impl TripRecord {
    pub fn new(
        trip_id: String,
        start_station_id: String,
        end_station_id: String,
        started_at: NaiveDateTime,
        ended_at: NaiveDateTime,
    ) -> TripRecord {
        TripRecord {
            trip_id,
            start_station_id,
            end_station_id,
            started_at,
            ended_at,
        }
    }

    /// minute-of-day this trip departed its start station
    pub fn started_minute(&self) -> u16 {
        minute_clock::minute_of_day(&self.started_at)
    }

    /// minute-of-day this trip arrived at its end station
    pub fn ended_minute(&self) -> u16 {
        minute_clock::minute_of_day(&self.ended_at)
    }
}

#[cfg(test)]
mod test {
    use super::TripRecord;
    use chrono::NaiveDate;

    #[test]
    fn test_derived_minutes() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let trip = TripRecord::new(
            String::from("ride-1"),
            String::from("A32000"),
            String::from("B32012"),
            date.and_hms_opt(8, 5, 12).unwrap(),
            date.and_hms_opt(8, 20, 59).unwrap(),
        );
        assert_eq!(trip.started_minute(), 485);
        assert_eq!(trip.ended_minute(), 500);
    }
}
