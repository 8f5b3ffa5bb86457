//! Property tests for the aggregation functions.

use chrono::NaiveDate;
use proptest::prelude::*;

use kept_core::calendar::date_key;
use kept_core::model::{DayStatus, Envelopes, NoSpendDays};
use kept_core::stats::{
    current_streak, envelope_total, format_currency, longest_streak, ENVELOPE_GOAL,
};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn days_strategy() -> impl Strategy<Value = NoSpendDays> {
    proptest::collection::btree_map(0u64..3000, any::<bool>(), 0..200).prop_map(|raw| {
        raw.into_iter()
            .map(|(offset, no_spend)| {
                let date = base_date() + chrono::Duration::days(offset as i64);
                let status = if no_spend {
                    DayStatus::NoSpend
                } else {
                    DayStatus::Spend
                };
                (date_key(date), status)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn longest_streak_never_exceeds_marked_day_count(days in days_strategy()) {
        let no_spend = days.values().filter(|s| **s == DayStatus::NoSpend).count() as u32;
        let longest = longest_streak(&days);
        prop_assert!(longest <= no_spend);
        prop_assert_eq!(longest == 0, no_spend == 0);
    }

    #[test]
    fn current_streak_never_exceeds_marked_day_count(
        days in days_strategy(),
        today_offset in 0u64..3000,
    ) {
        let today = base_date() + chrono::Duration::days(today_offset as i64);
        let no_spend = days.values().filter(|s| **s == DayStatus::NoSpend).count() as u32;
        prop_assert!(current_streak(&days, today) <= no_spend);
    }

    #[test]
    fn current_streak_is_idempotent(days in days_strategy(), today_offset in 0u64..3000) {
        let today = base_date() + chrono::Duration::days(today_offset as i64);
        prop_assert_eq!(current_streak(&days, today), current_streak(&days, today));
    }

    #[test]
    fn envelope_total_stays_within_challenge_bounds(
        envelopes in proptest::collection::btree_set(1u32..=100, 0..=100)
    ) {
        let envelopes: Envelopes = envelopes;
        let total = envelope_total(&envelopes);
        prop_assert!(total >= 0.0);
        prop_assert!(total <= ENVELOPE_GOAL);
    }

    #[test]
    fn currency_output_shape_is_stable(amount in 0.0f64..1_000_000_000.0) {
        let rendered = format_currency(amount);
        prop_assert_eq!(&rendered, &format_currency(amount));
        prop_assert!(rendered.starts_with('$'));
        let body = &rendered[1..];
        let (dollars, cents) = body.split_once('.').expect("decimal point");
        prop_assert_eq!(cents.len(), 2);
        prop_assert!(cents.bytes().all(|b| b.is_ascii_digit()));
        for (i, group) in dollars.split(',').enumerate() {
            prop_assert!(!group.is_empty() && group.len() <= 3);
            if i > 0 {
                prop_assert_eq!(group.len(), 3);
            }
            prop_assert!(group.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
