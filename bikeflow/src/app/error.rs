use std::path::PathBuf;

use bikeflow_core::model::TrafficError;

#[derive(thiserror::Error, Debug)]
pub enum BikeflowAppError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("Error writing to '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
    #[error("Failed to deserialize station inventory: {0}")]
    StationDecodeError(String),
    #[error("Serializing traffic snapshot failed: {0}")]
    SnapshotEncodeError(String),
    #[error(transparent)]
    Traffic(#[from] TrafficError),
}
