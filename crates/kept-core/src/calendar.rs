//! Date-key formatting and month-grid helpers.
//!
//! `YYYY-MM-DD` is the canonical key used everywhere a calendar day is
//! addressed, formatted from the day's local calendar fields.

use chrono::{Datelike, NaiveDate, Weekday};

/// Formats a date as its canonical `YYYY-MM-DD` key.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a canonical date key back to a date. Lenient: malformed keys
/// yield `None` rather than an error, so a corrupt entry can be skipped.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// Number of days in the given month (`month` is 1-based).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    match first {
        Some(d) => {
            let next = if month == 12 {
                NaiveDate::from_ymd_opt(year + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(year, month + 1, 1)
            };
            next.map_or(0, |n| n.signed_duration_since(d).num_days() as u32)
        }
        None => 0,
    }
}

/// Weekday index of the first of the month, 0 = Sunday, for laying out
/// a month grid.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| match d.weekday() {
            Weekday::Sun => 0,
            Weekday::Mon => 1,
            Weekday::Tue => 2,
            Weekday::Wed => 3,
            Weekday::Thu => 4,
            Weekday::Fri => 5,
            Weekday::Sat => 6,
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_zero_pads_month_and_day() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(date_key(d), "2024-03-07");
    }

    #[test]
    fn parse_is_inverse_of_format() {
        let d = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(parse_date_key(&date_key(d)), Some(d));
        assert_eq!(parse_date_key("not-a-date"), None);
        assert_eq!(parse_date_key("2024-02-30"), None);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn first_weekday_is_sunday_based() {
        // 2024-09-01 was a Sunday.
        assert_eq!(first_weekday(2024, 9), 0);
        // 2024-01-01 was a Monday.
        assert_eq!(first_weekday(2024, 1), 1);
    }
}
