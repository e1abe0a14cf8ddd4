use std::path::Path;

use bikeflow_core::model::{TimeFilter, TrafficConfig, TrafficSession};

use crate::app::BikeflowAppError;
use crate::input::{station_source, trip_source};

/// loads the datasets, runs one aggregation pass and writes the snapshot.
pub fn run(
    trips_file: &Path,
    stations_file: &Path,
    minute: Option<u32>,
    config: TrafficConfig,
    output: Option<&Path>,
) -> Result<(), BikeflowAppError> {
    let stations = station_source::read_stations(stations_file)?;
    let (trips, summary) = trip_source::read_trips(trips_file)?;
    log::info!(
        "loaded {} trips ({} skipped) and {} stations",
        summary.loaded,
        summary.skipped,
        stations.len()
    );

    let filter = match minute {
        None => TimeFilter::Unfiltered,
        Some(minute) => TimeFilter::centered_at(minute)?,
    };

    let session = TrafficSession::new(trips, stations, config)?;
    let snapshot = session.recompute(&filter)?;

    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| BikeflowAppError::SnapshotEncodeError(e.to_string()))?;
    match output {
        Some(path) => {
            std::fs::write(path, json).map_err(|e| BikeflowAppError::WriteError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            log::info!("wrote traffic snapshot to {path:?}");
        }
        None => println!("{json}"),
    }
    Ok(())
}
