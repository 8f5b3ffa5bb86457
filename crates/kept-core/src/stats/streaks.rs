//! Streak calculations over the no-spend day mapping.

use chrono::{Datelike, NaiveDate};

use crate::calendar::{date_key, parse_date_key};
use crate::model::{DayStatus, NoSpendDays};

/// Consecutive no-spend days ending at (or just before) `today`.
///
/// The walk starts at `today` and moves backward one day at a time,
/// counting days marked no-spend. An unlogged `today` is skipped without
/// breaking the run: the user may simply not have logged yet. Every
/// earlier unlogged day, and any day marked spend, ends the walk. A
/// `today` marked spend yields 0 regardless of prior history.
pub fn current_streak(days: &NoSpendDays, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = today;
    loop {
        match days.get(&date_key(cursor)) {
            Some(DayStatus::NoSpend) => {
                streak += 1;
            }
            None if cursor == today => {
                // today is forgiving; yesterday onward is not
            }
            _ => break,
        }
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    streak
}

/// Longest run of calendar-consecutive no-spend days anywhere in history.
///
/// Returns 0 when no day is marked no-spend, otherwise at least 1.
/// Entries whose keys do not parse as dates are ignored.
pub fn longest_streak(days: &NoSpendDays) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    // BTreeMap iteration yields keys in ascending date order.
    for (key, status) in days {
        if *status != DayStatus::NoSpend {
            continue;
        }
        let Some(date) = parse_date_key(key) else {
            continue;
        };
        run = match prev {
            Some(p) if date.signed_duration_since(p).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }
    longest
}

/// Count of days marked no-spend within the given month (`month` 1-based).
pub fn month_no_spend_count(days: &NoSpendDays, year: i32, month: u32) -> u32 {
    days.iter()
        .filter(|(_, status)| **status == DayStatus::NoSpend)
        .filter_map(|(key, _)| parse_date_key(key))
        .filter(|d| d.year() == year && d.month() == month)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DayStatus::{NoSpend, Spend};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn mark(days: &mut NoSpendDays, y: i32, m: u32, d: u32, status: DayStatus) {
        days.insert(date_key(day(y, m, d)), status);
    }

    #[test]
    fn empty_history_has_zero_streak() {
        let days = NoSpendDays::new();
        assert_eq!(current_streak(&days, day(2024, 6, 15)), 0);
        assert_eq!(longest_streak(&days), 0);
    }

    #[test]
    fn counts_today_plus_consecutive_prior_days() {
        let mut days = NoSpendDays::new();
        mark(&mut days, 2024, 6, 15, NoSpend);
        mark(&mut days, 2024, 6, 14, NoSpend);
        mark(&mut days, 2024, 6, 13, NoSpend);
        mark(&mut days, 2024, 6, 12, Spend);
        assert_eq!(current_streak(&days, day(2024, 6, 15)), 3);
    }

    #[test]
    fn unlogged_today_is_skipped_not_counted() {
        let mut days = NoSpendDays::new();
        mark(&mut days, 2024, 6, 14, NoSpend);
        mark(&mut days, 2024, 6, 13, NoSpend);
        mark(&mut days, 2024, 6, 12, NoSpend);
        // Today (the 15th) is unlogged: walk continues from the 14th.
        assert_eq!(current_streak(&days, day(2024, 6, 15)), 3);
    }

    #[test]
    fn unlogged_yesterday_breaks_the_streak() {
        let mut days = NoSpendDays::new();
        mark(&mut days, 2024, 6, 15, NoSpend);
        mark(&mut days, 2024, 6, 13, NoSpend);
        mark(&mut days, 2024, 6, 12, NoSpend);
        // Gap on the 14th stops the count after today.
        assert_eq!(current_streak(&days, day(2024, 6, 15)), 1);
    }

    #[test]
    fn spend_today_zeroes_the_streak() {
        let mut days = NoSpendDays::new();
        mark(&mut days, 2024, 6, 15, Spend);
        mark(&mut days, 2024, 6, 14, NoSpend);
        mark(&mut days, 2024, 6, 13, NoSpend);
        assert_eq!(current_streak(&days, day(2024, 6, 15)), 0);
    }

    #[test]
    fn unlogged_today_then_spend_yesterday_is_zero() {
        let mut days = NoSpendDays::new();
        mark(&mut days, 2024, 6, 14, Spend);
        mark(&mut days, 2024, 6, 13, NoSpend);
        assert_eq!(current_streak(&days, day(2024, 6, 15)), 0);
    }

    #[test]
    fn longest_streak_prefers_the_longer_run() {
        let mut days = NoSpendDays::new();
        mark(&mut days, 2024, 1, 1, NoSpend);
        mark(&mut days, 2024, 1, 2, NoSpend);
        mark(&mut days, 2024, 1, 4, NoSpend);
        assert_eq!(longest_streak(&days), 2);
    }

    #[test]
    fn longest_streak_ignores_spend_days_between_runs() {
        let mut days = NoSpendDays::new();
        mark(&mut days, 2024, 2, 1, NoSpend);
        mark(&mut days, 2024, 2, 2, Spend);
        mark(&mut days, 2024, 2, 3, NoSpend);
        assert_eq!(longest_streak(&days), 1);
    }

    #[test]
    fn longest_streak_spans_month_boundaries() {
        let mut days = NoSpendDays::new();
        mark(&mut days, 2024, 1, 31, NoSpend);
        mark(&mut days, 2024, 2, 1, NoSpend);
        mark(&mut days, 2024, 2, 2, NoSpend);
        assert_eq!(longest_streak(&days), 3);
    }

    #[test]
    fn single_no_spend_day_is_a_streak_of_one() {
        let mut days = NoSpendDays::new();
        mark(&mut days, 2024, 3, 10, NoSpend);
        assert_eq!(longest_streak(&days), 1);
    }

    #[test]
    fn month_count_filters_by_month_and_status() {
        let mut days = NoSpendDays::new();
        mark(&mut days, 2024, 6, 1, NoSpend);
        mark(&mut days, 2024, 6, 2, Spend);
        mark(&mut days, 2024, 6, 30, NoSpend);
        mark(&mut days, 2024, 7, 1, NoSpend);
        assert_eq!(month_no_spend_count(&days, 2024, 6), 2);
        assert_eq!(month_no_spend_count(&days, 2024, 7), 1);
        assert_eq!(month_no_spend_count(&days, 2024, 5), 0);
    }
}
