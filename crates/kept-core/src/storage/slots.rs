//! Slot-file access.
//!
//! Each collection owns exactly one JSON file holding its entire current
//! value. Reads and writes are always whole-document; there is no
//! incremental update at this boundary.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// The five persisted slots, one per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    NoSpendDays,
    Envelopes,
    Weeks,
    DidntBuy,
    Rules,
}

impl Slot {
    pub const ALL: [Slot; 5] = [
        Slot::NoSpendDays,
        Slot::Envelopes,
        Slot::Weeks,
        Slot::DidntBuy,
        Slot::Rules,
    ];

    /// Stable position in [`Slot::ALL`], used to key per-slot state.
    pub(crate) fn index(&self) -> usize {
        match self {
            Slot::NoSpendDays => 0,
            Slot::Envelopes => 1,
            Slot::Weeks => 2,
            Slot::DidntBuy => 3,
            Slot::Rules => 4,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Slot::NoSpendDays => "no_spend_days.json",
            Slot::Envelopes => "envelopes.json",
            Slot::Weeks => "weeks.json",
            Slot::DidntBuy => "didnt_buy.json",
            Slot::Rules => "rules.json",
        }
    }
}

/// Handle on the slot directory. Cheap to clone; persistence tasks take
/// a clone along with the serialized payload.
#[derive(Debug, Clone)]
pub struct SlotDb {
    dir: PathBuf,
}

impl SlotDb {
    /// Open the default data directory (see [`super::data_dir`]).
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn open() -> Result<Self> {
        Ok(Self {
            dir: super::data_dir()?,
        })
    }

    /// Open a specific directory, used by tests.
    pub fn at(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self, slot: Slot) -> PathBuf {
        self.dir.join(slot.file_name())
    }

    /// Read a slot, falling back to the collection's empty value when the
    /// file is absent or does not parse. A parse failure is logged and
    /// otherwise indistinguishable from an empty slot; it never fails the
    /// load of the other slots.
    pub fn load_or_default<T>(&self, slot: Slot) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path(slot);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return T::default(),
        };
        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                eprintln!(
                    "Warning: {} is unreadable, starting empty: {e}",
                    path.display()
                );
                T::default()
            }
        }
    }

    /// Write a slot's full value.
    ///
    /// # Errors
    /// Returns an error if serialization or the filesystem write fails.
    pub fn save<T>(&self, slot: Slot, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let content = serde_json::to_string(value)?;
        std::fs::write(self.path(slot), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DayStatus, NoSpendDays};

    #[test]
    fn absent_slot_loads_as_default() {
        let tmp = tempfile::tempdir().unwrap();
        let db = SlotDb::at(tmp.path());
        let days: NoSpendDays = db.load_or_default(Slot::NoSpendDays);
        assert!(days.is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let tmp = tempfile::tempdir().unwrap();
        let db = SlotDb::at(tmp.path());
        let mut days = NoSpendDays::new();
        days.insert("2024-06-01".into(), DayStatus::NoSpend);
        days.insert("2024-06-02".into(), DayStatus::Spend);
        db.save(Slot::NoSpendDays, &days).unwrap();

        let back: NoSpendDays = db.load_or_default(Slot::NoSpendDays);
        assert_eq!(back, days);
    }

    #[test]
    fn corrupt_slot_degrades_to_default() {
        let tmp = tempfile::tempdir().unwrap();
        let db = SlotDb::at(tmp.path());
        std::fs::write(db.path(Slot::Envelopes), "{not json").unwrap();
        let envelopes: crate::model::Envelopes = db.load_or_default(Slot::Envelopes);
        assert!(envelopes.is_empty());
    }

    #[test]
    fn slots_use_distinct_files() {
        let names: std::collections::BTreeSet<_> =
            Slot::ALL.iter().map(|s| s.file_name()).collect();
        assert_eq!(names.len(), Slot::ALL.len());
    }
}
