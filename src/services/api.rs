use crate::config::Config;
use crate::models::{
    error::AppError,
    reading::{Reading, SortMode, latest_from_response},
};

// CONSTANTS
const DEFAULT_RESOURCE: &str = "data-sensors";
const LATEST_FIRST_QUERY: &str = "sort[0]=createdAt:desc&pagination[limit]=1";

// API CONFIGURATION
/// Configuration for the sensor API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    resource: String,
    sort_mode: SortMode,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Returns how the newest reading is selected from a response.
    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Constructs the URL that yields the latest reading.
    pub fn latest_url(&self) -> String {
        let base = format!(
            "{}/api/{}",
            self.base_url.trim_end_matches('/'),
            self.resource
        );
        match self.sort_mode {
            SortMode::Server => format!("{base}?{LATEST_FIRST_QUERY}"),
            SortMode::Client => base,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    resource: Option<String>,
    sort_mode: Option<SortMode>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the collection name under `/api/`.
    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Sets whether the server or the client picks the newest reading.
    pub fn sort_mode(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = Some(sort_mode);
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::api_base_url().to_string()),
            resource: self
                .resource
                .unwrap_or_else(|| DEFAULT_RESOURCE.to_string()),
            sort_mode: self.sort_mode.unwrap_or_default(),
        }
    }
}

// SENSOR CLIENT
/// HTTP client for the sensor API.
pub struct SensorClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl SensorClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetches the most recent reading. No retry is attempted; the next poll is the retry.
    pub async fn fetch_latest(&self) -> Result<Reading, AppError> {
        let url = self.config.latest_url();

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))?;

        latest_from_response(&body, self.config.sort_mode())
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the latest reading using the given configuration.
pub async fn fetch_latest_reading(config: &ApiConfig) -> Result<Reading, AppError> {
    SensorClient::with_config(config.clone())?
        .fetch_latest()
        .await
}
