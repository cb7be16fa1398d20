//! Station lookup and identifier resolution.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Station, StationKey};

/// How an identifier was interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A Latin-letter code. `name` is the native name it maps to, if known.
    Code {
        name: Option<String>,
        key: Option<StationKey>,
    },
    /// A native-script name.
    Name { key: Option<StationKey> },
    /// Neither shape: mixed scripts, digits, punctuation or empty.
    Unrecognized,
}

impl Resolution {
    /// The resolved station key, if any.
    pub fn key(&self) -> Option<StationKey> {
        match self {
            Resolution::Code { key, .. } | Resolution::Name { key } => *key,
            Resolution::Unrecognized => None,
        }
    }

    /// Native name to echo back when a code was interpreted.
    pub fn echo(&self) -> Option<&str> {
        match self {
            Resolution::Code {
                name: Some(name), ..
            } => Some(name.as_str()),
            _ => None,
        }
    }
}

/// Immutable station lookup tables.
///
/// Holds native name → key and lowercase code → native name. Built once
/// at startup and passed by reference to whatever needs to resolve.
#[derive(Debug, Clone, Default)]
pub struct StationTable {
    keys_by_name: HashMap<String, StationKey>,
    names_by_code: HashMap<String, String>,
}

impl StationTable {
    /// Build the lookup tables from dataset entries.
    ///
    /// Full pinyin codes take precedence over abbreviations; the first
    /// entry for a given name or code wins.
    pub fn from_stations(stations: &[Station]) -> Self {
        let mut keys_by_name = HashMap::with_capacity(stations.len());
        let mut names_by_code = HashMap::with_capacity(stations.len() * 2);

        for station in stations {
            keys_by_name
                .entry(station.name.clone())
                .or_insert(station.key);
            if !station.code.is_empty() {
                names_by_code
                    .entry(station.code.to_lowercase())
                    .or_insert_with(|| station.name.clone());
            }
        }
        for station in stations {
            if !station.abbreviation.is_empty() {
                names_by_code
                    .entry(station.abbreviation.to_lowercase())
                    .or_insert_with(|| station.name.clone());
            }
        }

        Self {
            keys_by_name,
            names_by_code,
        }
    }

    /// Build directly from the two lookup tables.
    pub fn from_maps(
        keys_by_name: HashMap<String, StationKey>,
        names_by_code: HashMap<String, String>,
    ) -> Self {
        let names_by_code = names_by_code
            .into_iter()
            .map(|(code, name)| (code.to_lowercase(), name))
            .collect();
        Self {
            keys_by_name,
            names_by_code,
        }
    }

    /// Look up a key by native name.
    pub fn key_for_name(&self, name: &str) -> Option<StationKey> {
        self.keys_by_name.get(name).copied()
    }

    /// Look up a native name by Latin-letter code (case-insensitive).
    pub fn name_for_code(&self, code: &str) -> Option<&str> {
        self.names_by_code
            .get(&code.to_lowercase())
            .map(String::as_str)
    }

    /// Interpret a user-supplied identifier.
    pub fn resolve(&self, input: &str) -> Resolution {
        let resolution = if is_latin_code(input) {
            let name = self.name_for_code(input);
            let key = name.and_then(|n| self.key_for_name(n));
            Resolution::Code {
                name: name.map(str::to_string),
                key,
            }
        } else if is_native_name(input) {
            Resolution::Name {
                key: self.key_for_name(input),
            }
        } else {
            Resolution::Unrecognized
        };

        debug!(input, key = ?resolution.key(), "resolved station");
        resolution
    }

    /// Number of distinct station names.
    pub fn len(&self) -> usize {
        self.keys_by_name.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.keys_by_name.is_empty()
    }
}

fn is_latin_code(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_native_name(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| ('\u{4e00}'..='\u{9fa5}').contains(&c))
}
