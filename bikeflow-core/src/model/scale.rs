use serde::Serialize;

use crate::model::{StationTraffic, TimeFilter, TrafficConfig};

/// maps total traffic to a circle radius. the relationship is square-root
/// so that circle area, not radius, scales linearly with traffic count.
/// the output range comes from the filter mode: filtered windows see much
/// smaller absolute counts, so their range lifts the floor to keep small
/// values visible and widens the ceiling for contrast.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RadiusScale {
    pub domain_max: u32,
    pub range_min: f64,
    pub range_max: f64,
}

impl RadiusScale {
    /// derives the scale for an aggregated result set. the domain upper
    /// bound is the maximum total traffic over the stations; an empty or
    /// all-zero result collapses the domain and every radius maps to the
    /// range floor.
    pub fn for_stations(
        stations: &[StationTraffic],
        filter: &TimeFilter,
        config: &TrafficConfig,
    ) -> RadiusScale {
        let domain_max = stations.iter().map(|s| s.total_traffic).max().unwrap_or(0);
        let (range_min, range_max) = match filter {
            TimeFilter::Unfiltered => config.unfiltered_radius_range,
            TimeFilter::CenteredAt(_) => config.filtered_radius_range,
        };
        RadiusScale {
            domain_max,
            range_min,
            range_max,
        }
    }

    pub fn radius(&self, total_traffic: u32) -> f64 {
        if self.domain_max == 0 {
            return self.range_min;
        }
        let fraction = (total_traffic as f64 / self.domain_max as f64).sqrt();
        self.range_min + (self.range_max - self.range_min) * fraction
    }
}

/// quantizes a station's departure share into three discrete flow levels:
/// 0.0 (arrival-dominated), 0.5 (balanced), 1.0 (departure-dominated).
/// a station with zero total traffic resolves to ratio 0 rather than
/// dividing by zero.
pub fn flow_ratio(departures: u32, total_traffic: u32) -> f64 {
    let ratio = departures as f64 / std::cmp::max(total_traffic, 1) as f64;
    if ratio < 1.0 / 3.0 {
        0.0
    } else if ratio < 2.0 / 3.0 {
        0.5
    } else {
        1.0
    }
}
