use crate::core::localday::LocalDay;
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// A dashboard/export filter parsed from the --period flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Year(i32),
    Month { year: i32, month: u32 },
}

/// Parse "YYYY" or "YYYY-MM".
pub fn parse_period(p: &str) -> AppResult<Period> {
    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok(Period::Month {
            year: dm.year(),
            month: dm.month(),
        });
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        return Ok(Period::Year(year));
    }

    Err(AppError::InvalidPeriod(p.to_string()))
}

/// Parse "YYYY-MM-DD" into a local day.
pub fn parse_day(s: &str) -> AppResult<LocalDay> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(LocalDay::from_naive)
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_year_and_month_periods() {
        assert_eq!(parse_period("2026").unwrap(), Period::Year(2026));
        assert_eq!(
            parse_period("2026-03").unwrap(),
            Period::Month {
                year: 2026,
                month: 3
            }
        );
    }

    #[test]
    fn rejects_malformed_periods() {
        assert!(parse_period("2026-3x").is_err());
        assert!(parse_period("nope").is_err());
    }

    #[test]
    fn parses_day() {
        assert_eq!(parse_day("2026-01-14").unwrap(), LocalDay::new(2026, 1, 14));
        assert!(parse_day("2026-13-01").is_err());
    }
}
