use crate::cli::commands::auth_subject;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{count_logs, list_trackers};
use crate::db::users::resolve_user;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if matches!(cli.command, Commands::List) {
        let pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool.conn, &auth_subject(cli, cfg))?;

        let trackers = list_trackers(&pool.conn, user.id)?;

        if trackers.is_empty() {
            println!("No trackers yet. Create one with `rhabitlogger add <name>`.");
            return Ok(());
        }

        println!("📋 Trackers for {}:\n", user.auth_id);

        let mut table = Table::new(vec![
            Column {
                header: "Name".into(),
                width: 24,
            },
            Column {
                header: "Timezone".into(),
                width: 22,
            },
            Column {
                header: "Days".into(),
                width: 6,
            },
        ]);

        for t in &trackers {
            let days = count_logs(&pool.conn, t.id)?;
            table.add_row(vec![t.name.clone(), t.timezone.clone(), days.to_string()]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
