//! Conversions between UTC instants and user-local calendar days.
//!
//! A `LocalDay` is a civil date in some IANA timezone, not a fixed 24h
//! span of UTC. Every boundary between "instant" and "day" in this crate
//! goes through the two functions below; log rows are never bucketed by
//! raw epoch truncation.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, LocalResult, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use std::fmt;

/// A calendar date as the user sees it. Field order gives derived `Ord`
/// the calendar ordering (year, then month, then day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LocalDay {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl LocalDay {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn to_naive(self) -> AppResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or_else(|| AppError::InvalidDate(self.to_string()))
    }

    pub fn from_naive(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
        }
    }

    /// The next civil day.
    pub fn succ(self) -> AppResult<Self> {
        let next = self
            .to_naive()?
            .succ_opt()
            .ok_or_else(|| AppError::InvalidDate(format!("no day after {self}")))?;
        Ok(Self::from_naive(next))
    }
}

impl fmt::Display for LocalDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parse an IANA zone name.
pub fn parse_zone(tz: &str) -> AppResult<Tz> {
    tz.parse::<Tz>()
        .map_err(|_| AppError::InvalidTimezone(tz.to_string()))
}

/// The calendar date a UTC instant falls on in the named zone.
pub fn to_local_day(epoch_ms: i64, tz: &str) -> AppResult<LocalDay> {
    let zone = parse_zone(tz)?;
    let utc = Utc
        .timestamp_millis_opt(epoch_ms)
        .single()
        .ok_or_else(|| AppError::InvalidInstant(format!("epoch out of range: {epoch_ms}")))?;
    let local = utc.with_timezone(&zone);
    Ok(LocalDay {
        year: local.year(),
        month: local.month(),
        day: local.day(),
    })
}

/// UTC epoch millis of local midnight of `day` in the named zone.
///
/// When a DST gap swallows 00:00 the wall clock is advanced minute by
/// minute to the first instant that exists on the same civil day; an
/// ambiguous (repeated) midnight resolves to the earliest instant. Both
/// choices keep `to_local_day(local_midnight_utc(d, tz), tz) == d`.
pub fn local_midnight_utc(day: LocalDay, tz: &str) -> AppResult<i64> {
    let zone = parse_zone(tz)?;
    let date = day.to_naive()?;
    let mut wall = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::InvalidDate(day.to_string()))?;

    loop {
        match zone.from_local_datetime(&wall) {
            LocalResult::Single(dt) => return Ok(dt.timestamp_millis()),
            LocalResult::Ambiguous(earliest, _) => return Ok(earliest.timestamp_millis()),
            LocalResult::None => {
                wall = wall + Duration::minutes(1);
                if wall.date() != date {
                    // The whole civil day is absent from this zone's
                    // timeline (date-line style skip).
                    return Err(AppError::InvalidDate(format!(
                        "{day} does not exist in timezone {tz}"
                    )));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ord_follows_calendar_order() {
        let a = LocalDay::new(2025, 12, 31);
        let b = LocalDay::new(2026, 1, 1);
        let c = LocalDay::new(2026, 1, 2);
        assert!(a < b && b < c);
    }

    #[test]
    fn unknown_zone_is_rejected() {
        assert!(matches!(
            to_local_day(0, "Mars/Olympus_Mons"),
            Err(AppError::InvalidTimezone(_))
        ));
        assert!(matches!(
            local_midnight_utc(LocalDay::new(2026, 1, 14), "not-a-zone"),
            Err(AppError::InvalidTimezone(_))
        ));
    }

    #[test]
    fn invalid_date_is_rejected() {
        assert!(matches!(
            local_midnight_utc(LocalDay::new(2026, 2, 30), "UTC"),
            Err(AppError::InvalidDate(_))
        ));
    }
}
