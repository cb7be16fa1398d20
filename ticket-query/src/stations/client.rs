//! Station dataset download client.

use super::error::StationError;

/// Default URL of the `station_name.js` dataset.
pub const DEFAULT_STATIONS_URL: &str =
    "https://kyfw.12306.cn/otn/resources/js/framework/station_name.js";

/// Configuration for the station dataset client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// URL of the dataset
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StationClientConfig {
    /// Create a config pointing at the default dataset.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_STATIONS_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom dataset URL (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for StationClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the remote station dataset.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    url: String,
}

impl StationClient {
    /// Create a new station dataset client.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Download the raw dataset text.
    pub async fn fetch_text(&self) -> Result<String, StationError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StationError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = StationClientConfig::default();
        assert_eq!(config.url, DEFAULT_STATIONS_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = StationClientConfig::new()
            .with_url("http://localhost:8080/station_name.js")
            .with_timeout(5);
        assert_eq!(config.url, "http://localhost:8080/station_name.js");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        assert!(StationClient::new(StationClientConfig::new()).is_ok());
    }
}
