use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    let users: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    let trackers: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM trackers", [], |row| row.get(0))?;
    let logs: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM tracker_logs", [], |row| row.get(0))?;
    let done: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM tracker_logs WHERE is_accomplished = 1",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Users:{} {}{}{}", CYAN, RESET, GREEN, users, RESET);
    println!("{}• Trackers:{} {}{}{}", CYAN, RESET, GREEN, trackers, RESET);
    println!(
        "{}• Tracker logs:{} {}{}{} ({} accomplished)",
        CYAN, RESET, GREEN, logs, RESET, done
    );

    //
    // 3) DAY RANGE
    //
    let first_day: Option<String> = pool
        .conn
        .query_row(
            "SELECT printf('%04d-%02d-%02d', user_year, user_month, user_day)
             FROM tracker_logs
             ORDER BY user_year ASC, user_month ASC, user_day ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_day: Option<String> = pool
        .conn
        .query_row(
            "SELECT printf('%04d-%02d-%02d', user_year, user_month, user_day)
             FROM tracker_logs
             ORDER BY user_year DESC, user_month DESC, user_day DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_day.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_day.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Day range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
