pub mod gauge;
pub mod last_updated;
pub mod sensor_gauge;

pub use gauge::Gauge;
pub use last_updated::LastUpdated;
pub use sensor_gauge::SensorGauge;
