//! Challenge and didn't-buy totals.

use std::collections::BTreeMap;

use crate::model::{Category, DidntBuyItem, Envelopes, Weeks, ENVELOPE_MAX, WEEK_MAX};

/// Value of the completed 100-envelope challenge: 1 + 2 + ... + 100.
pub const ENVELOPE_GOAL: f64 = 5050.0;

/// Value of the completed 52-week challenge: 1 + 2 + ... + 52.
pub const WEEKS_GOAL: f64 = 1378.0;

/// Sum of stuffed envelopes; envelope `n` is worth `$n`.
pub fn envelope_total(envelopes: &Envelopes) -> f64 {
    envelopes.iter().map(|n| f64::from(*n)).sum()
}

/// Sum of completed weeks; week `n` is worth `$n`.
pub fn weeks_total(weeks: &Weeks) -> f64 {
    weeks.iter().map(|n| f64::from(*n)).sum()
}

/// Total would-have-been spend across the didn't-buy log.
pub fn didnt_buy_total(items: &[DidntBuyItem]) -> f64 {
    items.iter().map(|item| item.price).sum()
}

/// Snapshot of how far along a challenge is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChallengeProgress {
    /// Entries done (envelopes stuffed / weeks completed).
    pub done: u32,
    /// Entries in the whole challenge.
    pub total: u32,
    /// Dollars saved so far.
    pub saved: f64,
    /// Dollars at completion.
    pub goal: f64,
}

impl ChallengeProgress {
    /// Completion as a fraction in [0, 1], counted by entries.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.done) / f64::from(self.total)
        }
    }

    pub fn complete(&self) -> bool {
        self.done == self.total
    }
}

pub fn envelope_progress(envelopes: &Envelopes) -> ChallengeProgress {
    ChallengeProgress {
        done: envelopes.len() as u32,
        total: ENVELOPE_MAX,
        saved: envelope_total(envelopes),
        goal: ENVELOPE_GOAL,
    }
}

pub fn weeks_progress(weeks: &Weeks) -> ChallengeProgress {
    ChallengeProgress {
        done: weeks.len() as u32,
        total: WEEK_MAX,
        saved: weeks_total(weeks),
        goal: WEEKS_GOAL,
    }
}

/// Per-category didn't-buy totals, in category declaration order,
/// omitting categories with no items.
pub fn category_totals(items: &[DidntBuyItem]) -> Vec<(Category, f64)> {
    let mut totals: BTreeMap<Category, f64> = BTreeMap::new();
    for item in items {
        *totals.entry(item.category).or_insert(0.0) += item.price;
    }
    totals.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DidntBuyItem;

    fn item(name: &str, price: f64, category: Category) -> DidntBuyItem {
        DidntBuyItem::new(name, price, category, "2024-06-01".into())
    }

    #[test]
    fn full_envelope_set_sums_to_goal() {
        let envelopes: Envelopes = (1..=ENVELOPE_MAX).collect();
        assert_eq!(envelope_total(&envelopes), ENVELOPE_GOAL);
    }

    #[test]
    fn full_week_set_sums_to_goal() {
        let weeks: Weeks = (1..=WEEK_MAX).collect();
        assert_eq!(weeks_total(&weeks), WEEKS_GOAL);
    }

    #[test]
    fn empty_sets_sum_to_zero() {
        assert_eq!(envelope_total(&Envelopes::new()), 0.0);
        assert_eq!(weeks_total(&Weeks::new()), 0.0);
        assert_eq!(didnt_buy_total(&[]), 0.0);
    }

    #[test]
    fn didnt_buy_total_sums_prices() {
        let items = vec![
            item("a", 3.5, Category::FoodAndDrink),
            item("b", 12.0, Category::Shopping),
            item("c", 0.5, Category::Other),
        ];
        assert_eq!(didnt_buy_total(&items), 16.0);
    }

    #[test]
    fn envelope_progress_counts_entries_and_dollars() {
        let envelopes: Envelopes = [1, 2, 3, 100].into_iter().collect();
        let progress = envelope_progress(&envelopes);
        assert_eq!(progress.saved, 106.0);
        assert_eq!(progress.done, 4);
        assert_eq!(progress.fraction(), 0.04);
        assert!(!progress.complete());
    }

    #[test]
    fn complete_challenge_reports_complete() {
        let weeks: Weeks = (1..=WEEK_MAX).collect();
        let progress = weeks_progress(&weeks);
        assert_eq!(progress.fraction(), 1.0);
        assert!(progress.complete());
    }

    #[test]
    fn category_totals_groups_and_sums() {
        let items = vec![
            item("coffee", 4.75, Category::FoodAndDrink),
            item("snack", 2.25, Category::FoodAndDrink),
            item("cable", 9.0, Category::Tech),
        ];
        let totals = category_totals(&items);
        assert_eq!(
            totals,
            vec![(Category::FoodAndDrink, 7.0), (Category::Tech, 9.0)]
        );
    }
}
