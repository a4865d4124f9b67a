//! Log planning for tracker creation: one entry per user-local day from
//! the tracker's start instant through "now".
//!
//! Pure module: "now" is always an explicit argument, never read from the
//! wall clock here. Insertion of the plan is the storage layer's job.

use crate::core::dayrange::enumerate_days;
use crate::core::localday::{LocalDay, local_midnight_utc, to_local_day};
use crate::errors::{AppError, AppResult};

/// A log row to be created: the civil day plus the canonical UTC epoch of
/// that day's local midnight in `timezone`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedLog {
    pub local_day: LocalDay,
    pub epoch_ms: i64,
    pub timezone: String,
}

/// Plan the full set of logs a tracker should have, from the local day of
/// `start_epoch_ms` through the local day of `now_ms`, both interpreted
/// in `tz`.
pub fn plan_logs(start_epoch_ms: i64, tz: &str, now_ms: i64) -> AppResult<Vec<PlannedLog>> {
    let start_day = to_local_day(start_epoch_ms, tz)?;
    let end_day = to_local_day(now_ms, tz)?;

    if end_day < start_day {
        return Err(AppError::InvalidRange(format!(
            "now falls on {end_day}, before the tracker's start day {start_day}"
        )));
    }

    enumerate_days(start_day, end_day)?
        .into_iter()
        .map(|day| {
            Ok(PlannedLog {
                local_day: day,
                epoch_ms: local_midnight_utc(day, tz)?,
                timezone: tz.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_day_yields_single_log() {
        // 2026-01-14T12:00:00Z .. 2026-01-14T18:00:00Z, UTC
        let logs = plan_logs(1_768_392_000_000, "UTC", 1_768_413_600_000).unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].local_day, LocalDay::new(2026, 1, 14));
    }

    #[test]
    fn now_before_start_day_is_rejected() {
        // now is six hours before start on the same UTC day: still one day
        let same_day = plan_logs(1_768_413_600_000, "UTC", 1_768_392_000_000);
        assert!(same_day.is_ok());

        // now a full day earlier: rejected
        let r = plan_logs(1_768_392_000_000, "UTC", 1_768_392_000_000 - 86_400_000);
        assert!(matches!(r, Err(AppError::InvalidRange(_))));
    }
}
