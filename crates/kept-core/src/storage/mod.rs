//! Local persistence: five independent JSON slot files.

mod slots;

pub use slots::{Slot, SlotDb};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/kept[-dev]/` based on KEPT_ENV, creating it if
/// needed. KEPT_DATA_DIR overrides the location outright, which is how
/// tests point the store at a scratch directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("KEPT_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("KEPT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("kept-dev")
    } else {
        base_dir.join("kept")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
