use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = &cli.command
    {
        //
        // 1) PRINT
        //
        if *print_config {
            let yaml =
                serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration:\n");
            println!("{yaml}");
        }

        //
        // 2) CHECK
        //
        if *check {
            let path = Config::config_file();

            if !path.exists() {
                warning(format!(
                    "Config file not found at {} (defaults in use).",
                    path.display()
                ));
                return Ok(());
            }

            let content = fs::read_to_string(&path)?;
            match serde_yaml::from_str::<Config>(&content) {
                Ok(_) => success("Configuration file is valid."),
                Err(e) => return Err(AppError::Config(format!("invalid config file: {e}"))),
            }
        }
    }

    Ok(())
}
