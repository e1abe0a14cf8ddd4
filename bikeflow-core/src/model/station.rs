use serde::{Deserialize, Serialize};

/// a physical dock location with a stable external identifier. position is
/// carried for the rendering layer and is opaque to the aggregation engine.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Station {
    pub station_id: String,
    pub name: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

/// departure/arrival counts for one station under the active time filter.
/// produced fresh on every aggregation call, never accumulated across calls.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StationTraffic {
    pub station_id: String,
    pub departures: u32,
    pub arrivals: u32,
    pub total_traffic: u32,
}

impl StationTraffic {
    pub fn new(station_id: String, departures: u32, arrivals: u32) -> StationTraffic {
        StationTraffic {
            station_id,
            departures,
            arrivals,
            total_traffic: departures + arrivals,
        }
    }
}
