use std::path::Path;

use bikeflow_core::model::TrafficConfig;
use clap::{Parser, Subcommand};
use config::{Config, File};

use crate::app::BikeflowAppError;

/// Command line tool for aggregating per-station bicycle traffic by time of day
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct BikeflowApp {
    #[command(subcommand)]
    pub op: BikeflowOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum BikeflowOperation {
    /// aggregate per-station traffic for one time filter and write the
    /// snapshot as JSON.
    Traffic {
        /// CSV file of trip records
        #[arg(short, long)]
        trips_file: String,

        /// JSON file with the station inventory
        #[arg(short, long)]
        stations_file: String,

        /// minute-of-day in [0, 1440) to center the time window on.
        /// if not provided, aggregate over the whole day.
        #[arg(short, long)]
        minute: Option<u32>,

        /// TOML file overriding the window and radius scale defaults
        #[arg(short, long)]
        config_file: Option<String>,

        /// location on disk to write the snapshot. if not provided,
        /// write to stdout.
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl BikeflowOperation {
    pub fn run(&self) -> Result<(), BikeflowAppError> {
        match self {
            BikeflowOperation::Traffic {
                trips_file,
                stations_file,
                minute,
                config_file,
                output,
            } => {
                let traffic_config = match config_file {
                    None => TrafficConfig::default(),
                    Some(config_file) => {
                        let filepath = Path::new(config_file);
                        let config = Config::builder()
                            .add_source(File::from(filepath))
                            .build()
                            .map_err(|e| {
                                let msg = format!("file '{config_file}' produced error: {e}");
                                BikeflowAppError::InvalidUserInput(msg)
                            })?;
                        config.try_deserialize::<TrafficConfig>().map_err(|e| {
                            let msg =
                                format!("error reading traffic config in '{config_file}': {e}");
                            BikeflowAppError::InvalidUserInput(msg)
                        })?
                    }
                };
                crate::app::run::run(
                    Path::new(trips_file),
                    Path::new(stations_file),
                    *minute,
                    traffic_config,
                    output.as_ref().map(Path::new),
                )
            }
        }
    }
}
