use crate::cli::commands::auth_subject;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_tracker, find_tracker_by_name};
use crate::db::users::{require_owner, resolve_user};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { tracker } = &cli.command {
        let mut pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool.conn, &auth_subject(cli, cfg))?;

        let t = find_tracker_by_name(&pool.conn, tracker)?;
        require_owner(&t, &user)?;

        let prompt = format!(
            "Delete tracker '{}' and ALL of its day logs? This action is irreversible.",
            t.name
        );

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let logs_deleted = delete_tracker(&mut pool.conn, t.id)?;

        ttlog(
            &pool.conn,
            "del",
            &t.name,
            &format!("Tracker deleted along with {} day log(s)", logs_deleted),
        )?;

        success(format!(
            "Tracker '{}' deleted ({} day log(s) removed).",
            t.name, logs_deleted
        ));
    }

    Ok(())
}
