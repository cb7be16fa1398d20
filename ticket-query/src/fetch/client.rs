//! HTTP fetcher for the ticket availability service.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::domain::TicketRecord;

use super::error::FetchError;
use super::types::LeftTicketResponse;
use super::{Fetcher, QueryResult};

/// Default user agent; the service rejects obviously scripted clients.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko)";

/// Configuration for the HTTP fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FetcherConfig {
    pub fn new() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches ticket availability over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| FetchError::ApiError {
                status: 0,
                message: "Invalid user agent".to_string(),
            })?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http })
    }

    /// Query `url` and decode every train in the response.
    pub async fn fetch_tickets(&self, url: &str) -> Result<Vec<TicketRecord>, FetchError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        debug!(url, status = status.as_u16(), "ticket query response");

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(FetchError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        decode_response(&body)
    }
}

/// Decode a response body into ticket records.
pub(crate) fn decode_response(body: &str) -> Result<Vec<TicketRecord>, FetchError> {
    let envelope: LeftTicketResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

    if !envelope.status {
        return Err(FetchError::Rejected(envelope.failure_message()));
    }

    Ok(envelope
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|item| TicketRecord::from(item.query_left_new_dto))
        .collect())
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> QueryResult {
        match self.fetch_tickets(url).await {
            Ok(records) => QueryResult::Success(records),
            Err(FetchError::Rejected(message)) => QueryResult::Failure(message),
            Err(e) => QueryResult::Failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = FetcherConfig::default();
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = FetcherConfig::new().with_timeout(5).with_user_agent("test");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.user_agent, "test");
    }

    #[test]
    fn client_creation() {
        assert!(HttpFetcher::new(FetcherConfig::new()).is_ok());
    }

    #[test]
    fn invalid_user_agent_is_rejected() {
        let config = FetcherConfig::new().with_user_agent("bad\nagent");
        assert!(HttpFetcher::new(config).is_err());
    }

    #[test]
    fn decode_success_with_no_trains() {
        let records = decode_response(r#"{"status": true, "data": []}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn decode_rejected_envelope() {
        let err = decode_response(r#"{"status": false, "messages": ["系统忙"]}"#).unwrap_err();
        assert!(matches!(err, FetchError::Rejected(ref m) if m == "系统忙"));
    }

    #[test]
    fn decode_non_json_body() {
        let err = decode_response("<html>busy</html>").unwrap_err();
        assert!(matches!(err, FetchError::Json { .. }));
    }

    #[tokio::test]
    async fn unreachable_host_becomes_failure() {
        let fetcher = HttpFetcher::new(FetcherConfig::new().with_timeout(2)).unwrap();
        let result = fetcher.fetch("http://127.0.0.1:1/otn/leftTicket/query").await;
        assert!(!result.status());
    }
}
