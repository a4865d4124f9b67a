use crate::cli::commands::auth_subject;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::localday::to_local_day;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{find_tracker_by_name, set_accomplished, touch_tracker};
use crate::db::users::{require_owner, resolve_user};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::parse_day;
use crate::utils::time::resolve_now;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark {
        tracker,
        date,
        missed,
        tz,
    } = &cli.command
    {
        let tz = tz.as_deref().unwrap_or(&cfg.timezone);

        // The day to mark: explicit date, or "today" from the caller's
        // zone perspective.
        let day = match date {
            Some(s) => parse_day(s)?,
            None => to_local_day(resolve_now(cli.now.as_deref())?, tz)?,
        };

        let pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool.conn, &auth_subject(cli, cfg))?;

        let t = find_tracker_by_name(&pool.conn, tracker)?;
        require_owner(&t, &user)?;

        let accomplished = !*missed;
        set_accomplished(&pool.conn, t.id, day, accomplished)?;
        touch_tracker(&pool.conn, t.id)?;

        ttlog(
            &pool.conn,
            "mark",
            &t.name,
            &format!(
                "{} marked as {}",
                day,
                if accomplished { "accomplished" } else { "missed" }
            ),
        )?;

        if accomplished {
            success(format!("Marked {} as accomplished for '{}'.", day, t.name));
        } else {
            success(format!("Marked {} as missed for '{}'.", day, t.name));
        }
    }

    Ok(())
}
