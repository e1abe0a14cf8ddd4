use std::io::Read;
use std::path::Path;

use bikeflow_core::model::TripRecord;

use crate::app::BikeflowAppError;

/// counts of trip rows accepted and excluded during a load. excluded rows
/// are skipped, never fatal; the count is surfaced for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripLoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// reads trip records from a CSV file. rows with malformed timestamps or
/// missing station identifiers are excluded from the result and counted.
pub fn read_trips(path: &Path) -> Result<(Vec<TripRecord>, TripLoadSummary), BikeflowAppError> {
    let reader = csv::Reader::from_path(path).map_err(|e| BikeflowAppError::ReadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let (trips, summary) = collect_trips(reader);
    if summary.skipped > 0 {
        log::warn!(
            "excluded {} unparseable trip rows from {path:?}",
            summary.skipped
        );
    }
    Ok((trips, summary))
}

fn collect_trips<R: Read>(mut reader: csv::Reader<R>) -> (Vec<TripRecord>, TripLoadSummary) {
    let mut trips: Vec<TripRecord> = Vec::new();
    let mut skipped = 0;
    for row in reader.deserialize::<TripRecord>() {
        match row {
            Ok(trip) if has_station_ids(&trip) => trips.push(trip),
            Ok(trip) => {
                log::debug!("skipping trip '{}': missing station id", trip.trip_id);
                skipped += 1;
            }
            Err(e) => {
                log::debug!("skipping malformed trip row: {e}");
                skipped += 1;
            }
        }
    }
    let summary = TripLoadSummary {
        loaded: trips.len(),
        skipped,
    };
    (trips, summary)
}

fn has_station_ids(trip: &TripRecord) -> bool {
    !trip.start_station_id.trim().is_empty() && !trip.end_station_id.trim().is_empty()
}
