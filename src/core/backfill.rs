//! Backfill reconciliation: compute the trailing local days a tracker is
//! missing since its most recent log, without touching days already
//! present.

use crate::core::dayrange::enumerate_days;
use crate::core::generate::{PlannedLog, plan_logs};
use crate::core::localday::{local_midnight_utc, to_local_day};
use crate::errors::AppResult;
use crate::models::tracker_log::TrackerLog;

/// Plan the missing trailing logs for a tracker.
///
/// With no existing logs this degenerates to a full generation from the
/// tracker's stored start instant. Otherwise the resume point is one day
/// after the latest existing log, where "latest" is decided by calendar
/// day, not by canonical epoch: the per-log timezone may change across a
/// tracker's history, and with zones spanning UTC-12..UTC+14 the two
/// orderings can disagree.
///
/// Returns an empty plan when the tracker is already current.
pub fn plan_backfill(
    existing: &[TrackerLog],
    start_epoch_ms: i64,
    tz: &str,
    now_ms: i64,
) -> AppResult<Vec<PlannedLog>> {
    let latest = match existing.iter().map(|log| log.local_day()).max() {
        Some(day) => day,
        None => return plan_logs(start_epoch_ms, tz, now_ms),
    };

    let today = to_local_day(now_ms, tz)?;
    let resume = latest.succ()?;

    if resume > today {
        return Ok(Vec::new());
    }

    enumerate_days(resume, today)?
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
