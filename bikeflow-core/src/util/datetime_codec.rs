use chrono::{NaiveDateTime, ParseResult};
use serde::de::Error;
use serde::Deserialize;
use serde::Deserializer;

/// datetime format used by trip datasets. the fractional seconds term is
/// optional, so rows with and without sub-second precision both parse.
pub const TRIP_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

pub fn naive_datetime_from_str(datetime_str: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(datetime_str, TRIP_DATETIME_FORMAT)
}

pub fn deserialize_naive_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let datetime_str: String = String::deserialize(deserializer)?;
    naive_datetime_from_str(&datetime_str)
        .map_err(|e| D::Error::custom(format!("Invalid datetime format: {e}")))
}
