use crate::cli::commands::auth_subject;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::grouping::group_by_year_month;
use crate::db::pool::DbPool;
use crate::db::queries::{
    find_tracker_by_name, load_logs_by_month, load_logs_by_tracker, load_logs_by_year,
};
use crate::db::users::{require_owner, resolve_user};
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_rate, color_for_status};
use crate::utils::date::{Period, month_name, parse_period};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Logs { tracker, period } = &cli.command {
        let pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool.conn, &auth_subject(cli, cfg))?;

        let t = find_tracker_by_name(&pool.conn, tracker)?;
        require_owner(&t, &user)?;

        let logs = match period.as_deref().map(parse_period).transpose()? {
            None => load_logs_by_tracker(&pool.conn, t.id)?,
            Some(Period::Year(year)) => load_logs_by_year(&pool.conn, t.id, year)?,
            Some(Period::Month { year, month }) => {
                load_logs_by_month(&pool.conn, t.id, month, year)?
            }
        };

        if logs.is_empty() {
            println!("📊 '{}': no logs for the selected period.", t.name);
            return Ok(());
        }

        println!("📊 '{}' — completion history\n", t.name);

        let separator = cfg.separator_char.repeat(24);

        for year_group in group_by_year_month(&logs) {
            println!("{}", year_group.year);

            for month_group in year_group.months {
                let done = month_group
                    .logs
                    .iter()
                    .filter(|l| l.is_accomplished)
                    .count();
                let total = month_group.logs.len();
                let rate_color = color_for_rate(done, total);

                println!(
                    "  {} {} {}[{}/{}]{}",
                    month_name(month_group.month),
                    year_group.year,
                    rate_color,
                    done,
                    total,
                    RESET
                );
                println!("  {}", separator);

                for log in &month_group.logs {
                    let color = color_for_status(log.is_accomplished);
                    let marker = if log.is_accomplished {
                        "✔ accomplished"
                    } else {
                        "· pending"
                    };
                    println!("    {}  {}{}{}", log.date_str(), color, marker, RESET);
                }
                println!();
            }
        }
    }

    Ok(())
}
