mod bucket_store;
mod config;
mod error;
mod filter;
mod scale;
mod session;
mod station;
mod traffic_ops;
mod trip;
mod window;

pub use bucket_store::{BucketStore, MINUTES_PER_DAY};
pub use config::TrafficConfig;
pub use error::TrafficError;
pub use filter::TimeFilter;
pub use scale::{flow_ratio, RadiusScale};
pub use session::{StationVisual, TrafficSession, TrafficSnapshot};
pub use station::{Station, StationTraffic};
pub use traffic_ops::aggregate;
pub use trip::TripRecord;
pub use window::select_window;
