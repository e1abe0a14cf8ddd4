use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bikeflow_core::model::Station;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::app::BikeflowAppError;

/// station inventory feed shape: `{"data": {"stations": [...]}}`
#[derive(Debug, Deserialize)]
struct StationFeed {
    data: StationFeedData,
}

#[derive(Debug, Deserialize)]
struct StationFeedData {
    stations: Vec<RawStation>,
}

/// one station row as published, tolerant of the historic field spellings
/// and value types that coexist across inventory exports: identifiers may
/// be strings or bare numbers, coordinates may be numbers or numeric text.
#[derive(Debug, Deserialize)]
struct RawStation {
    /// legacy station number; preferred identifier when present
    #[serde(default, alias = "Number", deserialize_with = "deserialize_id")]
    number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_id")]
    short_name: Option<String>,
    #[serde(default, alias = "NAME")]
    name: Option<String>,
    #[serde(default, alias = "Lat", deserialize_with = "deserialize_coordinate")]
    lat: Option<f64>,
    #[serde(
        default,
        alias = "Long",
        alias = "Lon",
        deserialize_with = "deserialize_coordinate"
    )]
    lon: Option<f64>,
}

/// accepts a station identifier published as either a string or a number,
/// normalizing to the string form used as the aggregation grouping key.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected string or number station id, found {other}"
        ))),
    }
}

/// accepts a coordinate published as either a number or numeric text
fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) => Ok(s.trim().parse::<f64>().ok()),
        Some(other) => Err(D::Error::custom(format!(
            "expected numeric coordinate, found {other}"
        ))),
    }
}

impl RawStation {
    /// normalizes this row to a [`Station`]. rows without an identifier or
    /// a usable position are excluded from the visualized set.
    fn into_station(self) -> Option<Station> {
        let station_id = self
            .number
            .or(self.short_name)
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())?;
        let lat = self.lat?;
        let lon = self.lon?;
        Some(Station {
            station_id,
            name: self.name,
            lat,
            lon,
        })
    }
}

/// reads the station inventory from a JSON file, excluding stations with
/// no identifier or no geographic position and logging the excluded count.
pub fn read_stations(path: &Path) -> Result<Vec<Station>, BikeflowAppError> {
    let file = File::open(path).map_err(|e| BikeflowAppError::ReadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let feed: StationFeed = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| BikeflowAppError::StationDecodeError(e.to_string()))?;
    Ok(collect_stations(feed))
}

fn collect_stations(feed: StationFeed) -> Vec<Station> {
    let total = feed.data.stations.len();
    let stations: Vec<Station> = feed
        .data
        .stations
        .into_iter()
        .filter_map(RawStation::into_station)
        .collect();
    let excluded = total - stations.len();
    if excluded > 0 {
        log::warn!("excluded {excluded} stations missing an identifier or position");
    }
    stations
}
