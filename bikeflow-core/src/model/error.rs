#[derive(thiserror::Error, Debug)]
pub enum TrafficError {
    #[error("minute-of-day {0} is outside the valid range [0, 1440)")]
    MinuteOutOfRange(u32),
    #[error("invalid traffic configuration: {0}")]
    InvalidConfig(String),
}
