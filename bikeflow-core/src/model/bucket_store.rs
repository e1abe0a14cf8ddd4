use std::sync::Arc;

use crate::model::TripRecord;

pub const MINUTES_PER_DAY: usize = 1440;

/// trips bucketed by minute-of-day, once by departure time and once by
/// arrival time. minute-of-day is a dense integer key, so buckets live in
/// fixed-length arrays indexed directly rather than a sparse map: bucket
/// access is O(1) and iterating a minute range touches only those buckets.
///
/// built once from the complete trip set and read-only afterwards, so any
/// number of consumers may aggregate from it concurrently.
pub struct BucketStore {
    departures: Vec<Vec<Arc<TripRecord>>>,
    arrivals: Vec<Vec<Arc<TripRecord>>>,
    trip_count: usize,
}

impl BucketStore {
    /// buckets the complete trip set. O(n) in the number of trips; every
    /// trip lands in exactly one departure bucket and one arrival bucket.
    pub fn build(trips: Vec<TripRecord>) -> BucketStore {
        let mut departures: Vec<Vec<Arc<TripRecord>>> = vec![Vec::new(); MINUTES_PER_DAY];
        let mut arrivals: Vec<Vec<Arc<TripRecord>>> = vec![Vec::new(); MINUTES_PER_DAY];
        let trip_count = trips.len();
        for trip in trips {
            let trip = Arc::new(trip);
            departures[trip.started_minute() as usize].push(trip.clone());
            arrivals[trip.ended_minute() as usize].push(trip);
        }
        log::debug!("bucketed {trip_count} trips by minute-of-day");
        BucketStore {
            departures,
            arrivals,
            trip_count,
        }
    }

    /// departure buckets, indexed by started minute-of-day
    pub fn departures(&self) -> &[Vec<Arc<TripRecord>>] {
        &self.departures
    }

    /// arrival buckets, indexed by ended minute-of-day
    pub fn arrivals(&self) -> &[Vec<Arc<TripRecord>>] {
        &self.arrivals
    }

    /// number of trips ingested at build time
    pub fn trip_count(&self) -> usize {
        self.trip_count
    }
}
