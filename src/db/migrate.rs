use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if a table has a given column.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `users` table.
fn create_users_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            auth_id    TEXT NOT NULL UNIQUE,
            name       TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `trackers` table.
fn create_trackers_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS trackers (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id        INTEGER NOT NULL REFERENCES users(id),
            name           TEXT NOT NULL,
            start_epoch_ms INTEGER NOT NULL,
            timezone       TEXT NOT NULL,
            created_at     TEXT NOT NULL,
            updated_at     TEXT NOT NULL,
            UNIQUE(user_id, name)
        );

        CREATE INDEX IF NOT EXISTS idx_trackers_user ON trackers(user_id);
        "#,
    )?;
    Ok(())
}

/// Create the `tracker_logs` table with the modern schema (per-log
/// timezone included).
///
/// The UNIQUE key on (tracker_id, user_year, user_month, user_day) is
/// load-bearing: a duplicate day from a concurrent backfill becomes a
/// reported conflict, never a silent second row.
fn create_tracker_logs_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tracker_logs (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            tracker_id      INTEGER NOT NULL REFERENCES trackers(id),
            log_epoch_ms    INTEGER NOT NULL,
            timezone        TEXT NOT NULL DEFAULT 'UTC',
            user_year       INTEGER NOT NULL,
            user_month      INTEGER NOT NULL,
            user_day        INTEGER NOT NULL,
            is_accomplished INTEGER NOT NULL DEFAULT 0,
            UNIQUE(tracker_id, user_year, user_month, user_day)
        );

        CREATE INDEX IF NOT EXISTS idx_logs_tracker ON tracker_logs(tracker_id);
        CREATE INDEX IF NOT EXISTS idx_logs_tracker_month_year
            ON tracker_logs(tracker_id, user_month, user_year);
        CREATE INDEX IF NOT EXISTS idx_logs_tracker_year
            ON tracker_logs(tracker_id, user_year);
        "#,
    )?;
    Ok(())
}

/// Move the timezone from tracker-only onto each log row.
///
/// Early schemas kept a single zone on the tracker; since 0.4.0 every log
/// stores the zone it was generated with, and backfill ordering works on
/// calendar days so histories that mix zones stay correct.
fn migrate_add_timezone_to_logs(conn: &Connection) -> Result<()> {
    let version = "20260110_0001_per_log_timezone";

    // 1) Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if !has_column(conn, "tracker_logs", "timezone")? {
        conn.execute(
            "ALTER TABLE tracker_logs ADD COLUMN timezone TEXT NOT NULL DEFAULT 'UTC';",
            [],
        )?;

        // Seed the new column from the owning tracker's zone
        conn.execute(
            "UPDATE tracker_logs
             SET timezone = (SELECT timezone FROM trackers
                             WHERE trackers.id = tracker_logs.tracker_id)
             WHERE EXISTS (SELECT 1 FROM trackers
                           WHERE trackers.id = tracker_logs.tracker_id);",
            [],
        )?;

        success(format!(
            "Migration applied: {} → added per-log 'timezone' to tracker_logs",
            version
        ));
    }

    // 2) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Per-log timezone column ensured')",
        [version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure audit log table (migrations record themselves in it)
    ensure_log_table(conn)?;

    // 2) Base tables
    let logs_existed = table_exists(conn, "tracker_logs")?;

    create_users_table(conn)?;
    create_trackers_table(conn)?;
    create_tracker_logs_table(conn)?;

    if !logs_existed {
        success("Created tracker tables (modern schema).");
    }

    // 3) Versioned migrations
    migrate_add_timezone_to_logs(conn)?;

    Ok(())
}
