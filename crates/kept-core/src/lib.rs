//! # Kept Core Library
//!
//! Core logic for Kept, a no-spend habit tracker: mark no-spend days on a
//! calendar, run the 100-envelope and 52-week savings challenges, log
//! purchases you resisted, and keep personal no-buy rules. Everything is
//! stored on-device; there is no server and no sync.
//!
//! ## Architecture
//!
//! - **Model**: the five collections, in the exact shapes their JSON
//!   slot files hold
//! - **Stats**: pure aggregation (streaks, totals, currency rendering)
//!   over collection snapshots
//! - **Store**: in-memory mirror of the collections with write-through
//!   JSON persistence, one slot file per collection
//! - **Ops**: validated mutations the CLI (or any other front end)
//!   drives the store with
//!
//! ## Key Components
//!
//! - [`DataStore`]: owns the collections, loads and persists slots
//! - [`ops`]: calendar marking, challenge toggles, log and rule edits
//! - [`stats`]: `current_streak`, `longest_streak`, challenge totals,
//!   [`stats::format_currency`]

pub mod calendar;
pub mod error;
pub mod model;
pub mod ops;
pub mod stats;
pub mod storage;
pub mod store;

pub use error::{CoreError, Result, ValidationError};
pub use model::{
    Category, DayStatus, DidntBuyItem, DidntBuyItems, Envelopes, NoSpendDays, Rule, Rules, Weeks,
    ENVELOPE_MAX, WEEK_MAX,
};
pub use storage::{data_dir, Slot, SlotDb};
pub use store::{DataStore, Snapshot};
