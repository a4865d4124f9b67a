//! Subject registry and ownership checks.
//!
//! Authentication itself lives outside this crate: callers hand in an
//! already-authenticated subject identifier (the `--user` flag or the
//! configured profile) and everything here only resolves it and enforces
//! ownership.

use crate::errors::{AppError, AppResult};
use crate::models::tracker::Tracker;
use crate::models::user::User;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_user_row(row: &Row) -> Result<User> {
    Ok(User {
        id: row.get("id")?,
        auth_id: row.get("auth_id")?,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
    })
}

/// Register a subject if it is not known yet. Used by `init`.
pub fn ensure_user(conn: &Connection, auth_id: &str, name: &str) -> AppResult<User> {
    conn.execute(
        "INSERT INTO users (auth_id, name, created_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(auth_id) DO NOTHING",
        params![auth_id, name, Local::now().to_rfc3339()],
    )?;

    resolve_user(conn, auth_id)
}

/// Resolve an authenticated subject to its profile row.
pub fn resolve_user(conn: &Connection, auth_id: &str) -> AppResult<User> {
    let mut stmt = conn.prepare_cached("SELECT * FROM users WHERE auth_id = ?1")?;
    stmt.query_row([auth_id], map_user_row)
        .optional()?
        .ok_or(AppError::Unauthorized)
}

/// Reject callers that do not own the tracker.
pub fn require_owner(tracker: &Tracker, user: &User) -> AppResult<()> {
    if tracker.user_id != user.id {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}
