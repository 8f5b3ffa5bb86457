//! Command modules, one per subcommand group.

pub mod calendar;
pub mod data;
pub mod envelope;
pub mod log;
pub mod rules;
pub mod stats;
pub mod weeks;

use chrono::NaiveDate;
use kept_core::DataStore;
use uuid::Uuid;

/// Open the store over the default data directory and load all slots.
pub fn open_store() -> Result<DataStore, Box<dyn std::error::Error>> {
    let mut store = DataStore::open()?;
    store.load();
    Ok(store)
}

/// The host clock, taken once per command; core functions receive it as
/// a parameter.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_id(id: &str) -> Result<Uuid, Box<dyn std::error::Error>> {
    Ok(Uuid::parse_str(id).map_err(|_| format!("invalid id: {id}"))?)
}
