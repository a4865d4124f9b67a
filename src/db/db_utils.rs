//! Consistency utilities over the log set, used by `db --check`.

use crate::core::localday::LocalDay;
use crate::db::pool::DbPool;
use crate::db::queries::{list_trackers_all, load_logs_by_tracker};
use crate::errors::AppResult;

/// A hole in a tracker's day sequence: the first and last missing day.
#[derive(Debug, PartialEq, Eq)]
pub struct Gap {
    pub from: LocalDay,
    pub to: LocalDay,
}

/// Scan one tracker's logs for missing days between its first and last
/// recorded day. An empty result means the sequence is contiguous.
pub fn find_gaps(pool: &mut DbPool, tracker_id: i64) -> AppResult<Vec<Gap>> {
    let logs = load_logs_by_tracker(&pool.conn, tracker_id)?;

    let mut gaps = Vec::new();
    let mut days = logs.iter().map(|l| l.local_day());

    let Some(mut prev) = days.next() else {
        return Ok(gaps);
    };

    for day in days {
        let expected = prev.succ()?;
        if day > expected {
            gaps.push(Gap {
                from: expected,
                to: previous_day(day)?,
            });
        }
        prev = day;
    }

    Ok(gaps)
}

fn previous_day(day: LocalDay) -> AppResult<LocalDay> {
    let naive = day.to_naive()?;
    let prev = naive
        .pred_opt()
        .ok_or_else(|| crate::errors::AppError::InvalidDate(format!("no day before {day}")))?;
    Ok(LocalDay::from_naive(prev))
}

/// Print a contiguity report for every tracker in the database.
pub fn print_contiguity_report(pool: &mut DbPool) -> AppResult<()> {
    let trackers = list_trackers_all(&pool.conn)?;

    if trackers.is_empty() {
        println!("No trackers to check.");
        return Ok(());
    }

    for t in trackers {
        let gaps = find_gaps(pool, t.id)?;
        if gaps.is_empty() {
            println!("✔ '{}': day sequence contiguous", t.name);
        } else {
            println!("✘ '{}': {} gap(s) in day sequence", t.name, gaps.len());
            for g in gaps {
                println!("    missing {} .. {}", g.from, g.to);
            }
        }
    }

    Ok(())
}
