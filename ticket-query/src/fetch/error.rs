//! Fetcher error types.

use std::fmt;

/// Errors from the ticket query HTTP client.
#[derive(Debug)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Server returned an error status code
    ApiError { status: u16, message: String },

    /// Server refused the request (usually missing session cookies)
    Unauthorized,

    /// Response envelope reported `status: false`
    Rejected(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(e) => write!(f, "HTTP error: {e}"),
            FetchError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            FetchError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            FetchError::Unauthorized => write!(f, "request refused by ticket service"),
            FetchError::Rejected(msg) => write!(f, "query rejected: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http(err)
    }
}
