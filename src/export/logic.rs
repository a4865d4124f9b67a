use crate::db::pool::DbPool;
use crate::db::queries::{find_tracker_by_name, list_trackers, load_logs_by_tracker};
use crate::db::users::require_owner;
use crate::errors::AppResult;
use crate::export::fs_utils::prepare_destination;
use crate::export::model::LogExport;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::models::user::User;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the caller's log rows, optionally restricted to one tracker.
    pub fn run(
        pool: &mut DbPool,
        user: &User,
        tracker_name: Option<&str>,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        prepare_destination(file, force)?;

        let trackers = match tracker_name {
            Some(name) => {
                let t = find_tracker_by_name(&pool.conn, name)?;
                require_owner(&t, user)?;
                vec![t]
            }
            None => list_trackers(&pool.conn, user.id)?,
        };

        let mut rows: Vec<LogExport> = Vec::new();
        for t in &trackers {
            for log in load_logs_by_tracker(&pool.conn, t.id)? {
                rows.push(LogExport::from_log(t, &log));
            }
        }

        match format {
            ExportFormat::Csv => csv::write_csv(file, &rows)?,
            ExportFormat::Json => json::write_json(file, &rows)?,
        }

        notify_export_success(format.as_str(), Path::new(file));

        Ok(rows.len())
    }
}
