use serde::Serialize;

/// A goal the user tracks day by day.
///
/// `start_epoch_ms` is a single absolute instant; `timezone` is the zone
/// active when the tracker was created and serves as the default for
/// later generation. Each log row carries its own copy of the zone it
/// was generated with, so the effective zone may vary across a tracker's
/// history.
#[derive(Debug, Clone, Serialize)]
pub struct Tracker {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub start_epoch_ms: i64,
    pub timezone: String,
    pub created_at: String, // ISO8601
    pub updated_at: String, // ISO8601
}
