use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::auditlog::AuditLogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if matches!(cli.command, Commands::Log { print: true }) {
        let mut pool = DbPool::new(&cfg.database)?;
        AuditLogLogic::print_log(&mut pool, cfg)?;
    }

    Ok(())
}
