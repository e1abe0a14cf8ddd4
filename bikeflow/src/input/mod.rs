pub mod station_source;
pub mod trip_source;
