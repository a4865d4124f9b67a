//! Instant parsing and "now" resolution.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, TimeZone, Utc};

/// Parse an absolute instant given as RFC 3339 ("2026-01-14T12:00:00Z")
/// or raw epoch milliseconds.
pub fn parse_instant(s: &str) -> AppResult<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp_millis());
    }

    if let Ok(ms) = s.parse::<i64>() {
        return Ok(ms);
    }

    Err(AppError::InvalidInstant(s.to_string()))
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Resolve "now" for a command: the hidden --now override wins, otherwise
/// the wall clock. Core functions only ever see the resolved value.
pub fn resolve_now(override_instant: Option<&str>) -> AppResult<i64> {
    match override_instant {
        Some(s) => parse_instant(s),
        None => Ok(now_ms()),
    }
}

/// Render an epoch for human output, UTC.
pub fn format_instant_utc(epoch_ms: i64) -> String {
    match Utc.timestamp_millis_opt(epoch_ms).single() {
        Some(dt) => dt.to_rfc3339(),
        None => format!("{epoch_ms}ms"),
    }
}
