pub mod use_gauge_size;
pub mod use_sensor_reading;
