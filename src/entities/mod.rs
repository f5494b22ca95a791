//! Entity types and raw-record conversion
//!
//! Each resource the API returns is mapped from its raw JSON record into a
//! typed entity by [`FromRaw`]. Conversion is the only layer that inspects
//! provider field semantics; everything above just checks that a page carried
//! records at all. A malformed record fails with a [`Validation`] error that
//! names the offending field.
//!
//! [`Validation`]: crate::error::Error::Validation

mod channel;
mod playlist;
mod playlist_item;
mod thumbnails;
mod video;

pub use channel::Channel;
pub use playlist::Playlist;
pub use playlist_item::PlaylistItem;
pub use thumbnails::{Thumbnail, Thumbnails};
pub use video::Video;

use crate::error::{Error, Result};
use crate::logging::Logger;
use chrono::{DateTime, Utc};
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Conversion from a raw provider record into a typed entity
pub trait FromRaw: Sized {
    /// Convert one raw record, or fail with a validation error
    fn from_raw(raw: &Value, logger: &Logger) -> Result<Self>;

    /// Convert a sequence of raw records, fail-fast
    ///
    /// The first per-record failure short-circuits and becomes the aggregate
    /// error; no partial entity list is produced on failure.
    fn from_raw_many(raws: &[Value], logger: &Logger) -> Result<Vec<Self>> {
        raws.iter().map(|raw| Self::from_raw(raw, logger)).collect()
    }
}

// ============================================================================
// Field helpers
// ============================================================================

/// Walk a dotted path ("snippet.title") through nested objects
fn lookup<'a>(raw: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = raw;
    for part in path.split('.') {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

/// Extract a required string field
pub(crate) fn require_str(raw: &Value, path: &str) -> Result<String> {
    match lookup(raw, path) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(Error::validation(
            path,
            format!("expected a string, got {other}"),
        )),
        None => Err(Error::validation(path, "missing required field")),
    }
}

/// Extract an optional string field
pub(crate) fn opt_str(raw: &Value, path: &str) -> Option<String> {
    lookup(raw, path).and_then(Value::as_str).map(String::from)
}

/// Extract an optional unsigned count
///
/// The provider reports some counts as JSON numbers and some (the statistics
/// block) as decimal strings; both are accepted.
pub(crate) fn opt_count(raw: &Value, path: &str) -> Option<u64> {
    match lookup(raw, path)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Extract an optional list of strings, dropping non-string elements
pub(crate) fn opt_str_list(raw: &Value, path: &str) -> Vec<String> {
    lookup(raw, path)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Parse an optional RFC 3339 timestamp field
///
/// An absent field is `Ok(None)`; a present but unparseable one is a
/// validation error.
pub(crate) fn opt_timestamp(raw: &Value, path: &str) -> Result<Option<DateTime<Utc>>> {
    match lookup(raw, path) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| Error::validation(path, format!("invalid timestamp '{s}': {e}"))),
        Some(other) => Err(Error::validation(
            path,
            format!("expected a timestamp string, got {other}"),
        )),
    }
}

/// Deserialize the optional thumbnails block under `snippet.thumbnails`
pub(crate) fn opt_thumbnails(raw: &Value, logger: &Logger) -> Option<Thumbnails> {
    let value = lookup(raw, "snippet.thumbnails")?;
    match serde_json::from_value(value.clone()) {
        Ok(thumbnails) => Some(thumbnails),
        Err(e) => {
            // Thumbnails are cosmetic; a malformed block is logged, not fatal.
            logger.warn(&format!("ignoring malformed thumbnails block: {e}"));
            None
        }
    }
}
