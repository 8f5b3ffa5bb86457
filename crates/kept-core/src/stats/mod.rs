//! Aggregation engine: pure functions over collection snapshots.
//!
//! Everything here is side-effect-free and idempotent. Callers pass the
//! current collections (and "today" where relevant) on every call; no
//! function reads a clock or touches storage.

mod currency;
mod streaks;
mod totals;

pub use currency::format_currency;
pub use streaks::{current_streak, longest_streak, month_no_spend_count};
pub use totals::{
    category_totals, didnt_buy_total, envelope_total, weeks_total, ChallengeProgress,
    envelope_progress, weeks_progress, ENVELOPE_GOAL, WEEKS_GOAL,
};
