use crate::core::generate::PlannedLog;
use crate::core::localday::LocalDay;
use crate::errors::{AppError, AppResult};
use crate::models::tracker::Tracker;
use crate::models::tracker_log::TrackerLog;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_tracker_row(row: &Row) -> Result<Tracker> {
    Ok(Tracker {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        name: row.get("name")?,
        start_epoch_ms: row.get("start_epoch_ms")?,
        timezone: row.get("timezone")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn map_log_row(row: &Row) -> Result<TrackerLog> {
    Ok(TrackerLog {
        id: row.get("id")?,
        tracker_id: row.get("tracker_id")?,
        log_epoch_ms: row.get("log_epoch_ms")?,
        timezone: row.get("timezone")?,
        user_year: row.get("user_year")?,
        user_month: row.get("user_month")?,
        user_day: row.get("user_day")?,
        is_accomplished: row.get::<_, i64>("is_accomplished")? != 0,
    })
}

pub fn insert_tracker(
    conn: &Connection,
    user_id: i64,
    name: &str,
    start_epoch_ms: i64,
    timezone: &str,
) -> AppResult<i64> {
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO trackers (user_id, name, start_epoch_ms, timezone, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![user_id, name, start_epoch_ms, timezone, now, now],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            AppError::Conflict(format!("tracker '{name}' already exists"))
        }
        other => AppError::Db(other),
    })?;

    Ok(conn.last_insert_rowid())
}

pub fn get_tracker(conn: &Connection, id: i64) -> AppResult<Option<Tracker>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM trackers WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_tracker_row).optional()?)
}

/// Lookup by name across all users; ownership is enforced separately so
/// a foreign tracker surfaces as Unauthorized, not NotFound.
pub fn find_tracker_by_name(conn: &Connection, name: &str) -> AppResult<Tracker> {
    let mut stmt = conn.prepare_cached("SELECT * FROM trackers WHERE name = ?1 ORDER BY id ASC")?;
    stmt.query_row([name], map_tracker_row)
        .optional()?
        .ok_or_else(|| AppError::NotFound(format!("tracker '{name}'")))
}

pub fn list_trackers(conn: &Connection, user_id: i64) -> AppResult<Vec<Tracker>> {
    let mut stmt =
        conn.prepare_cached("SELECT * FROM trackers WHERE user_id = ?1 ORDER BY name ASC")?;
    let rows = stmt.query_map([user_id], map_tracker_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every tracker regardless of owner, for maintenance commands.
pub fn list_trackers_all(conn: &Connection) -> AppResult<Vec<Tracker>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM trackers ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_tracker_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn touch_tracker(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE trackers SET updated_at = ?1 WHERE id = ?2",
        params![Local::now().to_rfc3339(), id],
    )?;
    Ok(())
}

/// Delete a tracker and all of its logs in one transaction.
pub fn delete_tracker(conn: &mut Connection, id: i64) -> AppResult<usize> {
    let tx = conn.transaction()?;
    let logs = tx.execute("DELETE FROM tracker_logs WHERE tracker_id = ?1", [id])?;
    tx.execute("DELETE FROM trackers WHERE id = ?1", [id])?;
    tx.commit()?;
    Ok(logs)
}

/// Insert a planned batch of log rows for one tracker.
///
/// The caller supplies the transaction scope. A day that already exists
/// is skipped via the (tracker_id, day) uniqueness key and does not count
/// as created, which is what makes a lost concurrent-backfill race
/// harmless. Any other failure reports how far the batch got; the
/// surrounding transaction then rolls the partial work back.
pub fn bulk_insert_logs(
    conn: &Connection,
    tracker_id: i64,
    plan: &[PlannedLog],
) -> AppResult<usize> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO tracker_logs
             (tracker_id, log_epoch_ms, timezone, user_year, user_month, user_day, is_accomplished)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0)
         ON CONFLICT(tracker_id, user_year, user_month, user_day) DO NOTHING",
    )?;

    let mut created = 0usize;
    for entry in plan {
        let changed = stmt
            .execute(params![
                tracker_id,
                entry.epoch_ms,
                entry.timezone,
                entry.local_day.year,
                entry.local_day.month,
                entry.local_day.day,
            ])
            .map_err(|e| AppError::PartialInsert {
                created,
                expected: plan.len(),
                reason: e.to_string(),
            })?;
        created += changed;
    }

    Ok(created)
}

pub fn load_logs_by_tracker(conn: &Connection, tracker_id: i64) -> AppResult<Vec<TrackerLog>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM tracker_logs
         WHERE tracker_id = ?1
         ORDER BY user_year ASC, user_month ASC, user_day ASC",
    )?;
    collect_logs(stmt.query_map([tracker_id], map_log_row)?)
}

pub fn load_logs_by_month(
    conn: &Connection,
    tracker_id: i64,
    month: u32,
    year: i32,
) -> AppResult<Vec<TrackerLog>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM tracker_logs
         WHERE tracker_id = ?1 AND user_month = ?2 AND user_year = ?3
         ORDER BY user_day ASC",
    )?;
    collect_logs(stmt.query_map(params![tracker_id, month, year], map_log_row)?)
}

pub fn load_logs_by_year(conn: &Connection, tracker_id: i64, year: i32) -> AppResult<Vec<TrackerLog>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM tracker_logs
         WHERE tracker_id = ?1 AND user_year = ?2
         ORDER BY user_month ASC, user_day ASC",
    )?;
    collect_logs(stmt.query_map(params![tracker_id, year], map_log_row)?)
}

fn collect_logs(
    rows: impl Iterator<Item = Result<TrackerLog>>,
) -> AppResult<Vec<TrackerLog>> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Flip the accomplished flag for one day: the only user-mutable field
/// of a log row.
pub fn set_accomplished(
    conn: &Connection,
    tracker_id: i64,
    day: LocalDay,
    accomplished: bool,
) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE tracker_logs
         SET is_accomplished = ?1
         WHERE tracker_id = ?2 AND user_year = ?3 AND user_month = ?4 AND user_day = ?5",
        params![
            accomplished as i64,
            tracker_id,
            day.year,
            day.month,
            day.day
        ],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(format!("log for day {day}")));
    }
    Ok(())
}

pub fn count_logs(conn: &Connection, tracker_id: i64) -> AppResult<i64> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM tracker_logs WHERE tracker_id = ?1",
        [tracker_id],
        |row| row.get(0),
    )?)
}
