mod bikeflow_app;
mod error;
pub mod run;

pub use bikeflow_app::{BikeflowApp, BikeflowOperation};
pub use error::BikeflowAppError;
