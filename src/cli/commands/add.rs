use crate::cli::commands::auth_subject;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::generate::plan_logs;
use crate::core::localday::{local_midnight_utc, parse_zone};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{bulk_insert_logs, insert_tracker};
use crate::db::users::resolve_user;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::parse_day;
use crate::utils::time::{parse_instant, resolve_now};

/// Resolve the --start argument: a plain local date means local midnight
/// of that day in the tracker's zone, anything else is an absolute
/// instant. Missing means "now".
fn resolve_start(start: Option<&str>, tz: &str, now_ms: i64) -> AppResult<i64> {
    match start {
        None => Ok(now_ms),
        Some(s) => match parse_day(s) {
            Ok(day) => local_midnight_utc(day, tz),
            Err(_) => parse_instant(s),
        },
    }
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name, start, tz } = &cli.command {
        let tz = tz.as_deref().unwrap_or(&cfg.timezone);
        parse_zone(tz)?;

        let now_ms = resolve_now(cli.now.as_deref())?;
        let start_ms = resolve_start(start.as_deref(), tz, now_ms)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool.conn, &auth_subject(cli, cfg))?;

        // Plan before touching the database
        let plan = plan_logs(start_ms, tz, now_ms)?;

        // Tracker row + initial generation are one unit: a failure in the
        // batch rolls the tracker back too.
        let tx = pool.conn.transaction()?;
        let tracker_id = insert_tracker(&tx, user.id, name, start_ms, tz)?;
        let created = bulk_insert_logs(&tx, tracker_id, &plan)?;
        ttlog(
            &tx,
            "add",
            name,
            &format!("Tracker created with {} day log(s)", created),
        )?;
        tx.commit()?;

        success(format!(
            "Created tracker '{}' with {} day log(s).",
            name, created
        ));
    }

    Ok(())
}
