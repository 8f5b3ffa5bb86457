//! Validated operations over the state store.
//!
//! Screens and the CLI go through these instead of hand-rolling
//! read-modify-write on the raw collections. Each operation validates its
//! input, builds the full replacement value, and hands it to the store.
//! The store itself stays tolerant of whatever it is given; rejection
//! happens here, before anything is committed.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::calendar::{date_key, parse_date_key};
use crate::error::ValidationError;
use crate::model::{
    Category, DayStatus, DidntBuyItem, Rule, ENVELOPE_MAX, WEEK_MAX,
};
use crate::store::DataStore;

/// What a calendar tap should do to a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkAction {
    /// Unlogged -> no-spend -> spend -> unlogged, the calendar tap cycle.
    Cycle,
    Set(DayStatus),
    Clear,
}

/// Apply a mark action to `date`. Future dates (relative to `today`) are
/// rejected. Returns the day's resulting status, `None` meaning unlogged.
pub fn mark_day(
    store: &mut DataStore,
    date: NaiveDate,
    today: NaiveDate,
    action: MarkAction,
) -> Result<Option<DayStatus>, ValidationError> {
    if date > today {
        return Err(ValidationError::FutureDate {
            date: date_key(date),
        });
    }

    let key = date_key(date);
    let mut days = store.no_spend_days().clone();
    let next = match action {
        MarkAction::Cycle => match days.get(&key) {
            None => Some(DayStatus::NoSpend),
            Some(DayStatus::NoSpend) => Some(DayStatus::Spend),
            Some(DayStatus::Spend) => None,
        },
        MarkAction::Set(status) => Some(status),
        MarkAction::Clear => None,
    };
    match next {
        Some(status) => {
            days.insert(key, status);
        }
        None => {
            days.remove(&key);
        }
    }
    store.update_no_spend_days(days);
    Ok(next)
}

fn check_range(field: &'static str, value: u32, max: u32) -> Result<(), ValidationError> {
    if value < 1 || value > max {
        return Err(ValidationError::OutOfRange { field, value, max });
    }
    Ok(())
}

/// Mark envelope `n` stuffed. Idempotent for an already-stuffed envelope.
pub fn stuff_envelope(store: &mut DataStore, n: u32) -> Result<(), ValidationError> {
    check_range("envelope", n, ENVELOPE_MAX)?;
    let mut envelopes = store.envelopes().clone();
    envelopes.insert(n);
    store.update_envelopes(envelopes);
    Ok(())
}

pub fn unstuff_envelope(store: &mut DataStore, n: u32) -> Result<(), ValidationError> {
    check_range("envelope", n, ENVELOPE_MAX)?;
    let mut envelopes = store.envelopes().clone();
    envelopes.remove(&n);
    store.update_envelopes(envelopes);
    Ok(())
}

pub fn complete_week(store: &mut DataStore, n: u32) -> Result<(), ValidationError> {
    check_range("week", n, WEEK_MAX)?;
    let mut weeks = store.weeks().clone();
    weeks.insert(n);
    store.update_weeks(weeks);
    Ok(())
}

pub fn uncomplete_week(store: &mut DataStore, n: u32) -> Result<(), ValidationError> {
    check_range("week", n, WEEK_MAX)?;
    let mut weeks = store.weeks().clone();
    weeks.remove(&n);
    store.update_weeks(weeks);
    Ok(())
}

/// Log a resisted purchase. Name must be non-empty after trimming and
/// price strictly positive; the date must be a valid `YYYY-MM-DD` key.
/// Returns the id of the new record.
pub fn add_item(
    store: &mut DataStore,
    name: &str,
    price: f64,
    category: Category,
    date: &str,
) -> Result<Uuid, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyField { field: "name" });
    }
    if !(price > 0.0) {
        return Err(ValidationError::NonPositivePrice { price });
    }
    if parse_date_key(date).is_none() {
        return Err(ValidationError::InvalidDate {
            input: date.to_string(),
        });
    }

    let item = DidntBuyItem::new(name, price, category, date.to_string());
    let id = item.id;
    let mut items = store.didnt_buy_items().clone();
    items.push(item);
    store.update_didnt_buy_items(items);
    Ok(id)
}

pub fn remove_item(store: &mut DataStore, id: Uuid) -> Result<(), ValidationError> {
    let mut items = store.didnt_buy_items().clone();
    let before = items.len();
    items.retain(|item| item.id != id);
    if items.len() == before {
        return Err(ValidationError::UnknownId {
            kind: "item",
            id: id.to_string(),
        });
    }
    store.update_didnt_buy_items(items);
    Ok(())
}

/// Append a rule, active by default. Returns its id.
pub fn add_rule(store: &mut DataStore, text: &str) -> Result<Uuid, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyField { field: "text" });
    }
    let rule = Rule::new(text);
    let id = rule.id;
    let mut rules = store.rules().clone();
    rules.push(rule);
    store.update_rules(rules);
    Ok(id)
}

/// Flip a rule between active and inactive. Returns the new state.
pub fn toggle_rule(store: &mut DataStore, id: Uuid) -> Result<bool, ValidationError> {
    let mut rules = store.rules().clone();
    let rule = rules
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(ValidationError::UnknownId {
            kind: "rule",
            id: id.to_string(),
        })?;
    rule.active = !rule.active;
    let active = rule.active;
    store.update_rules(rules);
    Ok(active)
}

pub fn remove_rule(store: &mut DataStore, id: Uuid) -> Result<(), ValidationError> {
    let mut rules = store.rules().clone();
    let before = rules.len();
    rules.retain(|r| r.id != id);
    if rules.len() == before {
        return Err(ValidationError::UnknownId {
            kind: "rule",
            id: id.to_string(),
        });
    }
    store.update_rules(rules);
    Ok(())
}

/// Move a rule to a new zero-based position, clamped to the list end.
/// Order is user-significant, so this is the only reordering primitive.
pub fn move_rule(store: &mut DataStore, id: Uuid, position: usize) -> Result<(), ValidationError> {
    let mut rules = store.rules().clone();
    let from = rules
        .iter()
        .position(|r| r.id == id)
        .ok_or(ValidationError::UnknownId {
            kind: "rule",
            id: id.to_string(),
        })?;
    let rule = rules.remove(from);
    let to = position.min(rules.len());
    rules.insert(to, rule);
    store.update_rules(rules);
    Ok(())
}
