//! Group tracker logs by year and month for the dashboard.

use crate::models::tracker_log::TrackerLog;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct MonthGroup {
    pub month: u32,
    pub logs: Vec<TrackerLog>,
}

#[derive(Debug)]
pub struct YearGroup {
    pub year: i32,
    pub months: Vec<MonthGroup>,
}

/// Newest first: years descending, months descending within a year, log
/// rows ascending by day within a month.
pub fn group_by_year_month(logs: &[TrackerLog]) -> Vec<YearGroup> {
    let mut years: BTreeMap<i32, BTreeMap<u32, Vec<TrackerLog>>> = BTreeMap::new();

    for log in logs {
        years
            .entry(log.user_year)
            .or_default()
            .entry(log.user_month)
            .or_default()
            .push(log.clone());
    }

    years
        .into_iter()
        .rev()
        .map(|(year, months)| YearGroup {
            year,
            months: months
                .into_iter()
                .rev()
                .map(|(month, mut logs)| {
                    logs.sort_by_key(|l| l.user_day);
                    MonthGroup { month, logs }
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(year: i32, month: u32, day: u32) -> TrackerLog {
        TrackerLog {
            id: 0,
            tracker_id: 1,
            log_epoch_ms: 0,
            timezone: "UTC".into(),
            user_year: year,
            user_month: month,
            user_day: day,
            is_accomplished: false,
        }
    }

    #[test]
    fn groups_newest_first_days_ascending() {
        let logs = vec![
            log(2025, 12, 31),
            log(2026, 1, 2),
            log(2026, 1, 1),
            log(2026, 2, 1),
        ];

        let grouped = group_by_year_month(&logs);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].year, 2026);
        assert_eq!(grouped[0].months[0].month, 2);
        assert_eq!(grouped[0].months[1].month, 1);
        assert_eq!(
            grouped[0].months[1]
                .logs
                .iter()
                .map(|l| l.user_day)
                .collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(grouped[1].year, 2025);
        assert_eq!(grouped[1].months[0].month, 12);
    }
}
