//! Station identity types.

use std::fmt;

/// Error returned when parsing an invalid station key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station key: {reason}")]
pub struct InvalidStationKey {
    reason: &'static str,
}

/// A remote station key (telecode), e.g. `VNP` for Beijing South.
///
/// Keys are always 3 uppercase ASCII letters. This type guarantees
/// that any `StationKey` value is valid by construction.
///
/// # Examples
///
/// ```
/// use ticket_query::domain::StationKey;
///
/// let key = StationKey::parse("VNP").unwrap();
/// assert_eq!(key.as_str(), "VNP");
///
/// assert!(StationKey::parse("vnp").is_err());
/// assert!(StationKey::parse("VN").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationKey([u8; 3]);

impl StationKey {
    /// Parse a station key from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidStationKey> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidStationKey {
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidStationKey {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(StationKey([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationKey({})", self.as_str())
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the station dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Native-script name, e.g. `北京南`. Identifies the station.
    pub name: String,
    /// Lowercase Latin-letter code (full pinyin), e.g. `beijingnan`.
    pub code: String,
    /// Short Latin-letter code, e.g. `bjn`.
    pub abbreviation: String,
    /// Remote station key.
    pub key: StationKey,
}
