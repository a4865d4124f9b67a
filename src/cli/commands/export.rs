use crate::cli::commands::auth_subject;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::users::resolve_user;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        tracker,
        force,
    } = &cli.command
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool.conn, &auth_subject(cli, cfg))?;

        let rows = ExportLogic::run(&mut pool, &user, tracker.as_deref(), format, file, *force)?;

        ttlog(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} log row(s) as {}", rows, format.as_str()),
        )?;
    }

    Ok(())
}
