//! # Alpha Vantage Response Normalizer
//!
//! Walks a decoded response tree and rewrites its member names:
//!
//! - names that are exactly a date (`2018-01-01`) or a date-time
//!   (`2018-01-01 16:00:00`) become UTC timestamps in the
//!   `YYYY-MM-DDTHH:MM:SS.sssZ` layout;
//! - names found in [`keys::RENAMES`](super::keys::RENAMES) become their
//!   short form;
//! - everything else is kept.
//!
//! Values are normalized recursively, including the elements of arrays.
//! Scalars are returned unchanged.

use crate::markets::alphavantage::keys;
use crate::utils::misc::utils::format_rfc9557;
use chrono::{Datelike, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use regex::Regex;
use serde_json::{Map, Value};
use static_init::dynamic;
use thiserror::Error;

#[dynamic]
static TIMESTAMP: Regex =
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}( [0-9]{2}:[0-9]{2}:[0-9]{2})?$")
        .expect("timestamp pattern compiles");

/// Errors raised while normalizing a response tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolishError {
    /// A member name has the shape of a timestamp but does not name a real
    /// instant (e.g. `2018-02-30`, `2018-01-01 25:00:00`, or a local time
    /// skipped by a daylight-saving transition).
    #[error("key {key:?} looks like a timestamp but is not a valid date-time")]
    InvalidTimestamp {
        /// The offending member name, verbatim.
        key: String,
    },
}

/// True when the whole of `key` has the Alpha Vantage timestamp shape.
pub fn is_timestamp(key: &str) -> bool {
    TIMESTAMP.is_match(key)
}

/// # Polisher
///
/// The normalizer, bound to the time zone in which timestamp keys are read.
/// Alpha Vantage reports the zone of a series in its metadata (`"US/Eastern"`
/// for most equities) but the keys themselves carry no offset, so the reader
/// has to pick one. The default is UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Polisher {
    zone: Tz,
}

impl Default for Polisher {
    fn default() -> Self {
        Self { zone: chrono_tz::UTC }
    }
}

impl Polisher {
    /// A polisher reading timestamp keys as local times in `zone`.
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// The zone timestamp keys are interpreted in.
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Returns a normalized copy of `data`.
    ///
    /// # Errors
    /// [`PolishError::InvalidTimestamp`] for the first timestamp-shaped key that
    /// does not parse. Nothing is returned for the rest of the tree.
    pub fn polish(&self, data: &Value) -> Result<Value, PolishError> {
        match data {
            Value::Object(map) => {
                let mut clean = Map::with_capacity(map.len());
                for (key, value) in map {
                    // Later keys win when two names normalize to the same key.
                    clean.insert(self.polish_key(key)?, self.polish(value)?);
                }
                Ok(Value::Object(clean))
            }
            Value::Array(items) => items
                .iter()
                .map(|item| self.polish(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            scalar => Ok(scalar.clone()),
        }
    }

    /// Normalizes a single member name.
    pub fn polish_key(&self, key: &str) -> Result<String, PolishError> {
        if is_timestamp(key) {
            return self.iso_timestamp(key);
        }
        Ok(keys::canonical(key).to_string())
    }

    fn iso_timestamp(&self, key: &str) -> Result<String, PolishError> {
        let invalid = || PolishError::InvalidTimestamp { key: key.to_string() };

        let naive = if key.len() > 10 {
            NaiveDateTime::parse_from_str(key, "%Y-%m-%d %H:%M:%S").map_err(|_| invalid())?
        } else {
            NaiveDate::parse_from_str(key, "%Y-%m-%d")
                .map_err(|_| invalid())?
                .and_hms_opt(0, 0, 0)
                .ok_or_else(invalid)?
        };
        // chrono reads second 60 as a leap second.
        if naive.nanosecond() >= 1_000_000_000 {
            return Err(invalid());
        }

        let local = match self.zone.from_local_datetime(&naive) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earliest, _) => earliest,
            LocalResult::None => return Err(invalid()),
        };

        let utc = local.with_timezone(&Utc);
        // Four-digit years only.
        if !(0..=9999).contains(&utc.year()) {
            return Err(invalid());
        }
        Ok(format_rfc9557(&utc))
    }
}

/// Normalizes `data`, reading timestamp keys as UTC.
pub fn polish(data: &Value) -> Result<Value, PolishError> {
    Polisher::default().polish(data)
}
