/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Enable automatic data refresh polling. When disabled the reading is fetched once at mount.
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Polling interval in milliseconds (2 seconds)
    pub const POLLING_INTERVAL_MS: u32 = 2_000;

    /// Viewport widths at or below this use the compact gauge tier
    pub const COMPACT_BREAKPOINT_PX: f64 = 640.0;

    /// Sensor API base URL, overridable at build time with `SENSOR_API_BASE_URL`
    pub fn api_base_url() -> &'static str {
        option_env!("SENSOR_API_BASE_URL").unwrap_or("http://localhost:1337")
    }
}
