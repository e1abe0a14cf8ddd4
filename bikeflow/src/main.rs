use bikeflow::app::{BikeflowApp, BikeflowAppError};
use clap::Parser;

fn main() -> Result<(), BikeflowAppError> {
    env_logger::init();
    let args = BikeflowApp::parse();
    args.op.run()
}
