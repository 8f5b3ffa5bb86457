//! The state store: in-memory mirror of the five collections.
//!
//! One `DataStore` is constructed at process start and handed to whatever
//! needs it; there is no module-level singleton. `load` pulls all five
//! slots into memory, each degrading to its empty value independently.
//! Every `update_*` replaces a whole collection in memory synchronously,
//! then hands the serialized document to a detached task for the disk
//! write. Callers never wait on persistence; `flush` exists so tests and
//! shutdown can await outstanding writes deterministically.
//!
//! The caller model is a single-threaded event loop, so two updates to
//! the same collection are ordered by call order and last-write-wins is
//! the whole consistency story. Each slot's write tasks form a chain
//! (every task joins its predecessor before writing), so the persisted
//! file always lands in update order even though the tasks themselves
//! are detached; writes to different slots stay independent. A write
//! that never completes loses only that update; the next launch restores
//! the prior persisted value.

use serde::Serialize;
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::model::{DidntBuyItems, Envelopes, NoSpendDays, Rules, Weeks};
use crate::storage::{Slot, SlotDb};

/// Serializable view of all five collections at once, used by exports.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub no_spend_days: &'a NoSpendDays,
    pub envelopes: &'a Envelopes,
    pub weeks: &'a Weeks,
    pub didnt_buy_items: &'a DidntBuyItems,
    pub rules: &'a Rules,
}

pub struct DataStore {
    db: SlotDb,
    no_spend_days: NoSpendDays,
    envelopes: Envelopes,
    weeks: Weeks,
    didnt_buy_items: DidntBuyItems,
    rules: Rules,
    loaded: bool,
    /// Tail of each slot's write chain, indexed by `Slot::index`.
    pending: [Option<JoinHandle<()>>; 5],
}

impl DataStore {
    /// Store over the default data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self> {
        Ok(Self::new(SlotDb::open()?))
    }

    /// Store over an explicit slot directory. Collections start at their
    /// empty values until [`load`](Self::load) runs.
    pub fn new(db: SlotDb) -> Self {
        Self {
            db,
            no_spend_days: NoSpendDays::default(),
            envelopes: Envelopes::default(),
            weeks: Weeks::default(),
            didnt_buy_items: DidntBuyItems::default(),
            rules: Rules::default(),
            loaded: false,
            pending: [None, None, None, None, None],
        }
    }

    /// Bulk-load all five slots. A slot that is absent or unparsable
    /// leaves its collection empty without affecting the other four.
    pub fn load(&mut self) {
        self.no_spend_days = self.db.load_or_default(Slot::NoSpendDays);
        self.envelopes = self.db.load_or_default(Slot::Envelopes);
        self.weeks = self.db.load_or_default(Slot::Weeks);
        self.didnt_buy_items = self.db.load_or_default(Slot::DidntBuy);
        self.rules = self.db.load_or_default(Slot::Rules);
        self.loaded = true;
    }

    /// False until the initial bulk load has completed.
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    pub fn no_spend_days(&self) -> &NoSpendDays {
        &self.no_spend_days
    }

    pub fn envelopes(&self) -> &Envelopes {
        &self.envelopes
    }

    pub fn weeks(&self) -> &Weeks {
        &self.weeks
    }

    pub fn didnt_buy_items(&self) -> &DidntBuyItems {
        &self.didnt_buy_items
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            no_spend_days: &self.no_spend_days,
            envelopes: &self.envelopes,
            weeks: &self.weeks,
            didnt_buy_items: &self.didnt_buy_items,
            rules: &self.rules,
        }
    }

    pub fn update_no_spend_days(&mut self, days: NoSpendDays) {
        self.no_spend_days = days;
        let payload = serde_json::to_string(&self.no_spend_days);
        self.spawn_write(Slot::NoSpendDays, payload);
    }

    pub fn update_envelopes(&mut self, envelopes: Envelopes) {
        self.envelopes = envelopes;
        let payload = serde_json::to_string(&self.envelopes);
        self.spawn_write(Slot::Envelopes, payload);
    }

    pub fn update_weeks(&mut self, weeks: Weeks) {
        self.weeks = weeks;
        let payload = serde_json::to_string(&self.weeks);
        self.spawn_write(Slot::Weeks, payload);
    }

    pub fn update_didnt_buy_items(&mut self, items: DidntBuyItems) {
        self.didnt_buy_items = items;
        let payload = serde_json::to_string(&self.didnt_buy_items);
        self.spawn_write(Slot::DidntBuy, payload);
    }

    pub fn update_rules(&mut self, rules: Rules) {
        self.rules = rules;
        let payload = serde_json::to_string(&self.rules);
        self.spawn_write(Slot::Rules, payload);
    }

    /// Empty all five collections and persist all five slots. Each slot
    /// write is independent; a crash partway leaves a partially wiped
    /// store, which the single-device scope tolerates.
    pub fn reset_all(&mut self) {
        self.update_no_spend_days(NoSpendDays::default());
        self.update_envelopes(Envelopes::default());
        self.update_weeks(Weeks::default());
        self.update_didnt_buy_items(DidntBuyItems::default());
        self.update_rules(Rules::default());
    }

    /// Await every persistence task spawned so far. Call before process
    /// exit, and from tests that assert on slot files.
    pub async fn flush(&mut self) {
        for handle in &mut self.pending {
            if let Some(handle) = handle.take() {
                let _ = handle.await;
            }
        }
    }

    /// Queue the full-document write for a slot. The new task joins the
    /// slot's previous write before touching the file, so a slot's
    /// writes land in update order; different slots stay independent.
    /// Failures never reach the caller: in-memory state is already
    /// correct for this session, and the next successful write of the
    /// slot supersedes the loss.
    fn spawn_write(&mut self, slot: Slot, payload: serde_json::Result<String>) {
        let payload = match payload {
            Ok(payload) => payload,
            Err(e) => {
                eprintln!("Warning: failed to encode {}: {e}", slot.file_name());
                return;
            }
        };
        let path = self.db.path(slot);
        let prev = self.pending[slot.index()].take();
        let handle = tokio::spawn(async move {
            if let Some(prev) = prev {
                let _ = prev.await;
            }
            let write_path = path.clone();
            let result =
                tokio::task::spawn_blocking(move || std::fs::write(&write_path, payload)).await;
            if let Ok(Err(e)) = result {
                eprintln!("Warning: failed to persist {}: {e}", path.display());
            }
        });
        self.pending[slot.index()] = Some(handle);
    }
}
