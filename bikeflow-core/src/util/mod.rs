pub mod datetime_codec;
pub mod minute_clock;
