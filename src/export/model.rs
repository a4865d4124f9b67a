use crate::models::tracker::Tracker;
use crate::models::tracker_log::TrackerLog;
use crate::utils::time::format_instant_utc;
use serde::Serialize;

/// One exported row: a tracker day flattened for CSV/JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct LogExport {
    pub tracker: String,
    pub date: String,
    pub timezone: String,
    pub canonical_utc: String,
    pub accomplished: bool,
}

impl LogExport {
    pub fn from_log(tracker: &Tracker, log: &TrackerLog) -> Self {
        Self {
            tracker: tracker.name.clone(),
            date: log.date_str(),
            timezone: log.timezone.clone(),
            canonical_utc: format_instant_utc(log.log_epoch_ms),
            accomplished: log.is_accomplished,
        }
    }
}
