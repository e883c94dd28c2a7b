//! Task List Core Library
//!
//! This library provides the state-management core of a single-page task
//! list editor: add, edit, complete, filter, and delete short text items,
//! optionally tagged with a priority, with the whole collection persisted
//! to a local JSON slot between sessions.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Controller Layer**: `TaskListController` - Owns the store, the
//!   staged input, and the view filter; every committed change is
//!   persisted
//! - **Domain Layer**: `model` module - Item records, the ordered
//!   collection and its mutation operations, filters and derived stats
//! - **Persistence Layer**: `storage` module - Single JSON slot under a
//!   fixed key, best-effort load, unconditional overwrite on save
//!
//! # Example
//!
//! ```no_run
//! use task_list::TaskListController;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut controller = TaskListController::new("data")?;
//!     controller.add("buy milk", None)?;
//!     println!("{}", controller.render());
//!     Ok(())
//! }
//! ```

mod formatting;
mod model;
mod ops;
mod storage;

use anyhow::Result;
use std::path::Path;

// Re-export commonly used types
pub use formatting::{format_items, format_stats};
pub use model::{Filter, Item, Priority, Stats, TaskList, timestamp_now};
pub use storage::{SLOT_KEY, Storage};

/// Transient input the user is composing before an add commits it
#[derive(Debug, Default)]
struct InputStaging {
    text: String,
    priority: Priority,
}

/// Controller for the task list editor
///
/// Owns the one authoritative `TaskList` instance together with the staged
/// input, the view filter, and the storage adapter. All mutation flows
/// through this controller: the store changes first, then the new state is
/// written to the slot, so persisted state always trails the visible state
/// within the same call.
pub struct TaskListController {
    list: TaskList,
    staging: InputStaging,
    filter: Filter,
    storage: Storage,
}

impl TaskListController {
    /// Create a controller backed by the slot in the given directory
    ///
    /// Loads the persisted collection once (an absent or unreadable slot
    /// yields the empty list) and writes the loaded state straight back,
    /// so the slot exists from the first session on.
    ///
    /// # Example
    /// ```no_run
    /// # use task_list::TaskListController;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let controller = TaskListController::new("data")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(store_dir: impl AsRef<Path>) -> Result<Self> {
        let storage = Storage::new(store_dir);
        let list = storage.load();
        storage.save(&list)?;
        Ok(Self {
            list,
            staging: InputStaging::default(),
            filter: Filter::default(),
            storage,
        })
    }

    /// Write the current collection to the slot
    fn persist(&self) -> Result<()> {
        self.storage.save(&self.list)
    }

    /// The full collection, regardless of the current filter
    pub fn list(&self) -> &TaskList {
        &self.list
    }

    /// Currently staged input text
    pub fn staged_text(&self) -> &str {
        &self.staging.text
    }

    /// Replace the staged input text
    pub fn set_staged_text(&mut self, text: impl Into<String>) {
        self.staging.text = text.into();
    }

    /// Currently staged priority for the next item
    pub fn staged_priority(&self) -> Priority {
        self.staging.priority
    }

    /// Replace the staged priority
    pub fn set_staged_priority(&mut self, priority: Priority) {
        self.staging.priority = priority;
    }

    /// Current view filter
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Select the view filter
    ///
    /// Only changes which items are visible; the collection itself is
    /// untouched.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Reset the staged input back to its defaults
    fn reset_staging(&mut self) {
        self.staging = InputStaging::default();
    }
}
