//! Station dataset loading and identifier resolution.
//!
//! The dataset comes from a local `station_name.js` file, a fresh disk
//! cache, or the remote server, in that order of preference. Whatever the
//! source, it ends up as an immutable [`StationTable`].

mod cache;
mod client;
mod error;
mod parse;
mod table;

use std::path::PathBuf;

use tracing::{info, warn};

pub use cache::StationCache;
pub use client::{DEFAULT_STATIONS_URL, StationClient, StationClientConfig};
pub use error::StationError;
pub use parse::parse_station_names;
pub use table::{Resolution, StationTable};

/// Where to get the station dataset from.
#[derive(Debug, Clone)]
pub struct StationSource {
    /// Local `station_name.js` file; skips cache and network when set.
    pub file: Option<PathBuf>,
    pub cache: StationCache,
    pub client: StationClientConfig,
}

impl StationSource {
    /// Load the dataset and build the lookup table.
    pub async fn load(&self) -> Result<StationTable, StationError> {
        if let Some(path) = &self.file {
            let text = std::fs::read_to_string(path).map_err(|source| StationError::Io {
                path: path.display().to_string(),
                source,
            })?;
            let stations = parse_station_names(&text)?;
            info!(path = %path.display(), count = stations.len(), "loaded stations from file");
            return Ok(StationTable::from_stations(&stations));
        }

        if let Some(stations) = self.cache.load() {
            info!(
                path = %self.cache.path().display(),
                count = stations.len(),
                "loaded stations from cache"
            );
            return Ok(StationTable::from_stations(&stations));
        }

        let client = StationClient::new(self.client.clone())?;
        let text = client.fetch_text().await?;
        let stations = parse_station_names(&text)?;
        info!(url = %self.client.url, count = stations.len(), "downloaded station dataset");
        if let Err(e) = self.cache.store(&text) {
            warn!(error = %e, "failed to write station cache");
        }

        Ok(StationTable::from_stations(&stations))
    }
}
