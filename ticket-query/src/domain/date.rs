//! Travel date normalization.
//!
//! The remote service only understands `YYYY-MM-DD`. Users type dates in
//! a few looser shapes, which are canonicalized here before a query is
//! ever built.

use std::fmt;

use chrono::{Local, NaiveDate};

/// Error returned when a raw date matches none of the accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("date is invalid, you should use '2016-07-18' or '20160718' or '2016-7-18'")]
pub struct InvalidDate {
    /// The rejected input.
    pub raw: String,
}

/// A travel date in canonical `YYYY-MM-DD` form.
///
/// Accepted raw forms are `YYYY-M-D`, `YYYY-MM-DD` and `YYYYMMDD`.
/// Only the shape is checked: digits are not validated and no calendar
/// check is made, so `2016-13-1` normalizes to `2016-13-01`.
///
/// # Examples
///
/// ```
/// use ticket_query::domain::TravelDate;
///
/// assert_eq!(TravelDate::normalize("2016-7-18").unwrap().as_str(), "2016-07-18");
/// assert_eq!(TravelDate::normalize("20160718").unwrap().as_str(), "2016-07-18");
/// assert!(TravelDate::normalize("2016/07/18").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TravelDate(String);

impl TravelDate {
    /// Canonicalize a user-supplied date string.
    pub fn normalize(raw: &str) -> Result<Self, InvalidDate> {
        let dashes = raw.matches('-').count();

        if dashes == 2 {
            let parts: Vec<String> = raw
                .split('-')
                .enumerate()
                .map(|(i, part)| {
                    // Year is never padded.
                    if i > 0 && part.chars().count() < 2 {
                        format!("0{part}")
                    } else {
                        part.to_string()
                    }
                })
                .collect();
            return Ok(TravelDate(parts.join("-")));
        }

        let chars: Vec<char> = raw.chars().collect();
        if chars.len() == 8 {
            let year: String = chars[0..4].iter().collect();
            let month: String = chars[4..6].iter().collect();
            let day: String = chars[6..8].iter().collect();
            return Ok(TravelDate(format!("{year}-{month}-{day}")));
        }

        Err(InvalidDate {
            raw: raw.to_string(),
        })
    }

    /// The canonical form of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        TravelDate(date.format("%Y-%m-%d").to_string())
    }

    /// Today's local calendar date.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Normalize `raw` if supplied, otherwise default to today.
    pub fn from_optional(raw: Option<&str>) -> Result<Self, InvalidDate> {
        match raw {
            Some(raw) => Self::normalize(raw),
            None => Ok(Self::today()),
        }
    }

    /// Returns the canonical string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
