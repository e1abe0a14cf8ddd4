use std::collections::HashMap;
use std::sync::Arc;

use itertools::Itertools;

use crate::model::{Station, StationTraffic, TripRecord};

/// merges departure and arrival counts into per-station traffic totals.
///
/// the departure subset is grouped by start station and the arrival subset
/// by end station; every station in `stations` is then mapped to a fresh
/// [`StationTraffic`], defaulting to zero for stations absent from the
/// window. a station with no matching trips is not an error. pure function
/// of its inputs; nothing accumulates across calls.
///
/// station identifiers are compared as their normalized string form, which
/// the data loaders establish at parse time so that trip and station
/// sources group under one comparable key.
pub fn aggregate(
    departure_trips: &[Arc<TripRecord>],
    arrival_trips: &[Arc<TripRecord>],
    stations: &[Station],
) -> Vec<StationTraffic> {
    let departures: HashMap<&str, usize> = departure_trips
        .iter()
        .counts_by(|t| t.start_station_id.as_str());
    let arrivals: HashMap<&str, usize> = arrival_trips
        .iter()
        .counts_by(|t| t.end_station_id.as_str());

    stations
        .iter()
        .map(|station| {
            let id = station.station_id.as_str();
            StationTraffic::new(
                station.station_id.clone(),
                departures.get(id).copied().unwrap_or(0) as u32,
                arrivals.get(id).copied().unwrap_or(0) as u32,
            )
        })
        .collect_vec()
}
