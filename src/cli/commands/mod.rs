pub mod add;
pub mod backfill;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod logs;
pub mod mark;

use crate::cli::parser::Cli;
use crate::config::Config;

/// The authenticated subject for this invocation: the --user flag wins,
/// otherwise the configured profile.
pub fn auth_subject(cli: &Cli, cfg: &Config) -> String {
    cli.user.clone().unwrap_or_else(|| cfg.user.clone())
}
