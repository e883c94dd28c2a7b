//! Persistence adapter for the task list
//!
//! The whole collection lives in a single key-value slot: one JSON file
//! under a fixed key inside the store directory. Loads are best-effort -
//! a missing slot yields the empty list, and a slot that cannot be read
//! or parsed is abandoned with a log entry rather than surfaced. Saves
//! overwrite the slot unconditionally.

use crate::model::TaskList;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed key of the single storage slot
pub const SLOT_KEY: &str = "todos";

pub struct Storage {
    slot_path: PathBuf,
}

impl Storage {
    /// Create a storage adapter rooted at the given directory
    ///
    /// The slot file is `<dir>/todos.json`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            slot_path: dir.as_ref().join(format!("{SLOT_KEY}.json")),
        }
    }

    /// Path of the slot file
    pub fn slot_path(&self) -> &Path {
        &self.slot_path
    }

    /// Load the task list from the slot
    ///
    /// Never fails: a missing slot means an empty list, and previously
    /// persisted data that cannot be read or parsed is logged and dropped,
    /// leaving the list empty. Corrupt data is lost, not repaired.
    pub fn load(&self) -> TaskList {
        if !self.slot_path.exists() {
            return TaskList::new();
        }

        let content = match fs::read_to_string(&self.slot_path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!(
                    "Failed to read slot '{}' at {}: {}",
                    SLOT_KEY,
                    self.slot_path.display(),
                    e
                );
                return TaskList::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(list) => list,
            Err(e) => {
                log::warn!(
                    "Malformed data in slot '{}' at {}, starting empty: {}",
                    SLOT_KEY,
                    self.slot_path.display(),
                    e
                );
                TaskList::new()
            }
        }
    }

    /// Save the full task list to the slot
    ///
    /// Serializes the whole collection and overwrites the stored blob
    /// unconditionally; there are no partial writes and no merging with
    /// prior content.
    pub fn save(&self, list: &TaskList) -> Result<()> {
        let content = serde_json::to_string_pretty(list)?;
        fs::write(&self.slot_path, content)?;
        log::debug!("Saved {} item(s) to slot '{}'", list.len(), SLOT_KEY);
        Ok(())
    }
}
