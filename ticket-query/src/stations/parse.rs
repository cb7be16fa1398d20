//! Parser for the `station_name.js` dataset.
//!
//! The dataset is a JavaScript assignment wrapping one long string:
//!
//! ```text
//! var station_names ='@bjb|北京北|VAP|beijingbei|bjb|0@bjd|北京东|BOP|beijingdong|bjd|1';
//! ```
//!
//! Each `@`-separated entry is `abbreviation|name|key|pinyin|short|index`.

use tracing::debug;

use crate::domain::{Station, StationKey};

use super::error::StationError;

/// Parse every well-formed entry out of `station_name.js` text.
///
/// Entries with fewer than four fields or an invalid key are skipped.
/// Fails only if nothing usable was found.
pub fn parse_station_names(text: &str) -> Result<Vec<Station>, StationError> {
    let body = unwrap_js_string(text);
    let mut skipped = 0usize;

    let stations: Vec<Station> = body
        .split('@')
        .filter(|entry| !entry.trim().is_empty())
        .filter_map(|entry| {
            let station = parse_entry(entry);
            if station.is_none() {
                skipped += 1;
            }
            station
        })
        .collect();

    if skipped > 0 {
        debug!(skipped, "skipped malformed station entries");
    }

    if stations.is_empty() {
        return Err(StationError::Parse {
            message: "no stations found".to_string(),
        });
    }

    Ok(stations)
}

/// Strip the `var x = '...';` wrapper if present.
fn unwrap_js_string(text: &str) -> &str {
    match (text.find('\''), text.rfind('\'')) {
        (Some(start), Some(end)) if end > start => &text[start + 1..end],
        _ => text.trim(),
    }
}

fn parse_entry(entry: &str) -> Option<Station> {
    let fields: Vec<&str> = entry.split('|').map(str::trim).collect();
    if fields.len() < 4 {
        return None;
    }

    let name = fields[1];
    if name.is_empty() {
        return None;
    }
    let key = StationKey::parse(fields[2]).ok()?;

    Some(Station {
        name: name.to_string(),
        code: fields[3].to_lowercase(),
        abbreviation: fields[0].to_lowercase(),
        key,
    })
}
