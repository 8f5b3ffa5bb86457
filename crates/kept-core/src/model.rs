//! Data model for the five tracked collections.
//!
//! Every collection is loaded wholesale into memory, mutated wholesale on
//! each user action, and persisted wholesale. The types here are the exact
//! shapes that round-trip through the JSON slot files.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a logged calendar day.
///
/// A date absent from the mapping is "unlogged", which is distinct from
/// both variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayStatus {
    #[serde(rename = "no-spend")]
    NoSpend,
    #[serde(rename = "spend")]
    Spend,
}

/// Mapping from `YYYY-MM-DD` date keys to logged status.
///
/// A `BTreeMap` keeps keys in ascending date order (the key format sorts
/// lexicographically as dates), which the streak scan relies on.
pub type NoSpendDays = BTreeMap<String, DayStatus>;

/// Stuffed envelopes of the 100-envelope challenge. Membership of `n`
/// means envelope `n` is stuffed and contributes `$n`.
pub type Envelopes = BTreeSet<u32>;

/// Completed weeks of the 52-week challenge. Membership of `n` means
/// week `n` is done and contributes `$n`.
pub type Weeks = BTreeSet<u32>;

/// Highest envelope number in the 100-envelope challenge.
pub const ENVELOPE_MAX: u32 = 100;

/// Number of weeks in the 52-week challenge.
pub const WEEK_MAX: u32 = 52;

/// Category tags for didn't-buy items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Category {
    #[serde(rename = "Food & Drink")]
    FoodAndDrink,
    Shopping,
    Entertainment,
    Clothing,
    Tech,
    Subscriptions,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::FoodAndDrink,
        Category::Shopping,
        Category::Entertainment,
        Category::Clothing,
        Category::Tech,
        Category::Subscriptions,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::FoodAndDrink => "Food & Drink",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Clothing => "Clothing",
            Category::Tech => "Tech",
            Category::Subscriptions => "Subscriptions",
            Category::Other => "Other",
        }
    }

    /// Case-insensitive lookup by label, used by the CLI boundary.
    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s))
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// An unknown label decodes to Other instead of failing, so one odd
// record can never take the whole slot down with it.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Category::parse(&label).unwrap_or(Category::Other))
    }
}

/// A purchase the user resisted, its would-have-been price counted as
/// money saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DidntBuyItem {
    pub id: Uuid,
    pub name: String,
    /// Price defaults to 0 when decoding a record that lost its price,
    /// rather than failing the whole slot.
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: Category,
    /// `YYYY-MM-DD` key of the day the item was logged.
    pub date: String,
}

impl DidntBuyItem {
    pub fn new(name: impl Into<String>, price: f64, category: Category, date: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            category,
            date,
        }
    }
}

/// A user-authored no-buy commitment. Order within the rules list is
/// user-significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: Uuid,
    pub text: String,
    pub active: bool,
}

impl Rule {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            active: true,
        }
    }
}

/// Ordered didn't-buy log.
pub type DidntBuyItems = Vec<DidntBuyItem>;

/// Ordered rules list.
pub type Rules = Vec<Rule>;
