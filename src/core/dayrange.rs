//! Inclusive enumeration of civil days between two local dates.

use crate::core::localday::LocalDay;
use crate::errors::{AppError, AppResult};

/// All civil days from `start` to `end` inclusive, strictly ascending.
///
/// A "day" is a calendar unit: DST makes some of them 23 or 25 hours
/// long, which is irrelevant here. `InvalidRange` when `start > end`, so
/// the loop below is always bounded.
pub fn enumerate_days(start: LocalDay, end: LocalDay) -> AppResult<Vec<LocalDay>> {
    if start > end {
        return Err(AppError::InvalidRange(format!(
            "start day {start} is after end day {end}"
        )));
    }

    let stop = end.to_naive()?;
    let mut d = start.to_naive()?;
    let mut out = Vec::new();

    while d <= stop {
        out.push(LocalDay::from_naive(d));
        d = d
            .succ_opt()
            .ok_or_else(|| AppError::InvalidDate(format!("no day after {}", d)))?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_day_range() {
        let d = LocalDay::new(2026, 1, 14);
        assert_eq!(enumerate_days(d, d).unwrap(), vec![d]);
    }

    #[test]
    fn crosses_leap_february() {
        let days = enumerate_days(LocalDay::new(2028, 2, 28), LocalDay::new(2028, 3, 1)).unwrap();
        assert_eq!(
            days,
            vec![
                LocalDay::new(2028, 2, 28),
                LocalDay::new(2028, 2, 29),
                LocalDay::new(2028, 3, 1),
            ]
        );
    }

    #[test]
    fn crosses_year_boundary() {
        let days = enumerate_days(LocalDay::new(2025, 12, 30), LocalDay::new(2026, 1, 2)).unwrap();
        assert_eq!(days.len(), 4);
        assert_eq!(days[1], LocalDay::new(2025, 12, 31));
        assert_eq!(days[2], LocalDay::new(2026, 1, 1));
    }

    #[test]
    fn reversed_range_is_rejected() {
        let r = enumerate_days(LocalDay::new(2026, 1, 15), LocalDay::new(2026, 1, 14));
        assert!(matches!(r, Err(AppError::InvalidRange(_))));
    }
}
