use serde::Serialize;

use crate::model::{
    scale, traffic_ops, window, BucketStore, RadiusScale, Station, StationTraffic, TimeFilter,
    TrafficConfig, TrafficError, TripRecord,
};

/// one analysis session over a fixed trip set and station inventory. the
/// session owns the immutable bucket store built at construction; every
/// filter change reruns the full selection, aggregation and scale
/// derivation from scratch, so overlapping calls from an eager UI are
/// independent and at worst render stale-then-fresh.
pub struct TrafficSession {
    store: BucketStore,
    stations: Vec<Station>,
    config: TrafficConfig,
}

/// aggregation output for one filter state, shaped for the rendering layer:
/// per-station counts with their derived visual parameters, the radius
/// scale they were derived from, and clock text for the UI control.
#[derive(Debug, Clone, Serialize)]
pub struct TrafficSnapshot {
    /// clock text for the filter center, None when unfiltered
    pub label: Option<String>,
    pub radius_scale: RadiusScale,
    pub stations: Vec<StationVisual>,
}

/// a single station's traffic counts and visual parameters
#[derive(Debug, Clone, Serialize)]
pub struct StationVisual {
    #[serde(flatten)]
    pub traffic: StationTraffic,
    pub radius: f64,
    pub flow_ratio: f64,
}

impl TrafficSession {
    /// builds the bucket store from the complete trip set and validates the
    /// session configuration.
    pub fn new(
        trips: Vec<TripRecord>,
        stations: Vec<Station>,
        config: TrafficConfig,
    ) -> Result<TrafficSession, TrafficError> {
        config.validate()?;
        let store = BucketStore::build(trips);
        log::info!(
            "traffic session ready: {} trips across {} stations",
            store.trip_count(),
            stations.len()
        );
        Ok(TrafficSession {
            store,
            stations,
            config,
        })
    }

    /// recomputes per-station traffic and scales for a filter state.
    ///
    /// cheap enough to run synchronously on every slider movement: the
    /// selection touches only the buckets inside the window, and the
    /// aggregation is linear in the trips selected.
    pub fn recompute(&self, filter: &TimeFilter) -> Result<TrafficSnapshot, TrafficError> {
        filter.validate()?;
        let half_width = self.config.half_width_minutes;
        let departure_trips = window::select_window(self.store.departures(), filter, half_width);
        let arrival_trips = window::select_window(self.store.arrivals(), filter, half_width);
        log::debug!(
            "window selected {} departures, {} arrivals",
            departure_trips.len(),
            arrival_trips.len()
        );

        let traffic = traffic_ops::aggregate(&departure_trips, &arrival_trips, &self.stations);
        let radius_scale = RadiusScale::for_stations(&traffic, filter, &self.config);
        let stations = traffic
            .into_iter()
            .map(|t| {
                let radius = radius_scale.radius(t.total_traffic);
                let flow_ratio = scale::flow_ratio(t.departures, t.total_traffic);
                StationVisual {
                    traffic: t,
                    radius,
                    flow_ratio,
                }
            })
            .collect();

        Ok(TrafficSnapshot {
            label: filter.label()?,
            radius_scale,
            stations,
        })
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn trip_count(&self) -> usize {
        self.store.trip_count()
    }
}
