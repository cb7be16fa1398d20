//! Station dataset error types.

/// Errors that can occur while loading the station dataset.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Dataset server returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Dataset text contained no usable stations
    #[error("station dataset parse error: {message}")]
    Parse { message: String },

    /// Reading a local dataset file failed
    #[error("failed to read station file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Cache operation failed
    #[error("cache error: {message}")]
    Cache { message: String },
}
