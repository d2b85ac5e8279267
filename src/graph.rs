//! Helpers for values delivered by the Microsoft Graph mail API

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::debug;

/// Parse a Graph timestamp such as `receivedDateTime`.
///
/// Accepts RFC 3339 with `Z` or an explicit offset. A timestamp without any
/// offset is taken as UTC. Missing or unparsable values yield `None`.
#[must_use]
pub fn parse_graph_datetime(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    match NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => Some(naive.and_utc()),
        Err(e) => {
            debug!("Ignoring unparsable Graph timestamp {value:?}: {e}");
            None
        }
    }
}
