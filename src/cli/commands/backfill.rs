use crate::cli::commands::auth_subject;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backfill::plan_backfill;
use crate::core::localday::parse_zone;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{bulk_insert_logs, find_tracker_by_name, load_logs_by_tracker};
use crate::db::users::{require_owner, resolve_user};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::time::resolve_now;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Backfill { tracker, tz } = &cli.command {
        let tz = tz.as_deref().unwrap_or(&cfg.timezone);
        parse_zone(tz)?;

        let now_ms = resolve_now(cli.now.as_deref())?;

        let mut pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool.conn, &auth_subject(cli, cfg))?;

        let t = find_tracker_by_name(&pool.conn, tracker)?;
        require_owner(&t, &user)?;

        let existing = load_logs_by_tracker(&pool.conn, t.id)?;
        let plan = plan_backfill(&existing, t.start_epoch_ms, tz, now_ms)?;

        if plan.is_empty() {
            info(format!("'{}' is already up to date: 0 day(s) created.", t.name));
            return Ok(());
        }

        let tx = pool.conn.transaction()?;
        let created = bulk_insert_logs(&tx, t.id, &plan)?;
        ttlog(
            &tx,
            "backfill",
            &t.name,
            &format!("Backfilled {} day log(s)", created),
        )?;
        tx.commit()?;

        success(format!(
            "Backfill complete for '{}': {} day(s) created.",
            t.name, created
        ));
    }

    Ok(())
}
