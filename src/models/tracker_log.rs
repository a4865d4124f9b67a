use crate::core::localday::LocalDay;
use serde::Serialize;

/// One calendar day of one tracker.
///
/// `log_epoch_ms` is derived: always the UTC instant of local midnight of
/// `(user_year, user_month, user_day)` in `timezone`. It exists for fast
/// range scans and must never diverge from the day fields. Only
/// `is_accomplished` is user-mutable after insertion.
#[derive(Debug, Clone, Serialize)]
pub struct TrackerLog {
    pub id: i64,
    pub tracker_id: i64,
    pub log_epoch_ms: i64,
    pub timezone: String,
    pub user_year: i32,
    pub user_month: u32,
    pub user_day: u32,
    pub is_accomplished: bool,
}

impl TrackerLog {
    pub fn local_day(&self) -> LocalDay {
        LocalDay::new(self.user_year, self.user_month, self.user_day)
    }

    pub fn date_str(&self) -> String {
        self.local_day().to_string()
    }
}
