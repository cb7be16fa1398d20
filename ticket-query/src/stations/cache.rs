//! On-disk copy of the downloaded `station_name.js` text.
//!
//! The file holds the dataset exactly as served; its modification time is
//! the fetch time. Loading runs the text back through
//! [`parse_station_names`], the same path a local dataset file takes.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::debug;

use crate::domain::Station;

use super::error::StationError;
use super::parse::parse_station_names;

/// Station names change rarely; a day-old copy is still good.
const DEFAULT_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// A dataset copy on disk, trusted for `max_age` after it was written.
#[derive(Debug, Clone)]
pub struct StationCache {
    path: PathBuf,
    max_age: Duration,
}

impl StationCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_age: DEFAULT_MAX_AGE,
        }
    }

    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stations from a fresh, parseable copy, or `None`.
    pub fn load(&self) -> Option<Vec<Station>> {
        let age = std::fs::metadata(&self.path)
            .and_then(|meta| meta.modified())
            .ok()
            .and_then(|written| SystemTime::now().duration_since(written).ok())
            .unwrap_or(Duration::ZERO);
        if age >= self.max_age {
            debug!(path = %self.path.display(), ?age, "station cache is stale");
            return None;
        }

        let text = std::fs::read_to_string(&self.path).ok()?;
        match parse_station_names(&text) {
            Ok(stations) => Some(stations),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "ignoring unusable station cache");
                None
            }
        }
    }

    /// Write the dataset text as downloaded.
    pub fn store(&self, text: &str) -> Result<(), StationError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| StationError::Cache {
                message: format!("cannot create {}: {e}", dir.display()),
            })?;
        }
        std::fs::write(&self.path, text).map_err(|e| StationError::Cache {
            message: format!("cannot write {}: {e}", self.path.display()),
        })
    }
}

impl Default for StationCache {
    fn default() -> Self {
        Self::new(std::env::temp_dir().join("ticket-query").join("station_name.js"))
    }
}
