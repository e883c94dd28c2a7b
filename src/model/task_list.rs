use crate::model::item::{Item, Priority, timestamp_now};

/// The authoritative ordered collection of task items
///
/// Vec is used as the primary storage:
/// 1. Maintains newest-first display order directly (new items are
///    prepended)
/// 2. Enables predictable iteration order for UI/display
/// 3. Serializes to a stable JSON array
/// 4. Simple ownership model - Vec owns all data directly
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskList {
    /// All items, newest first
    pub(crate) items: Vec<Item>,

    /// Counter for generating unique item IDs
    ///
    /// Holds the highest id handed out so far. This is NOT serialized -
    /// it is rebuilt from the stored items during deserialization, so ids
    /// stay unique across sessions. A monotonic counter is used instead of
    /// wall-clock time so two items created in the same instant can never
    /// collide.
    pub(crate) next_id: u64,
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl TaskList {
    /// Create a new empty task list
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique item ID
    fn generate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// All items in display order (newest first)
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items in the collection
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item by its ID
    pub fn find_by_id(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Find an item by its ID and return a mutable reference
    fn find_by_id_mut(&mut self, id: u64) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Add a new item to the front of the collection
    ///
    /// The text is trimmed before storing. If the trimmed text is empty the
    /// collection is left untouched and no id is consumed.
    ///
    /// # Arguments
    /// * `text` - The item text, trimmed before storing
    /// * `priority` - Priority tag for the new item
    ///
    /// # Returns
    /// The id of the new item, or `None` when the trimmed text was empty
    pub fn add(&mut self, text: &str, priority: Priority) -> Option<u64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let id = self.generate_id();
        let item = Item {
            id,
            text: trimmed.to_string(),
            completed: false,
            priority,
            created_at: timestamp_now(),
        };

        // Newest first
        self.items.insert(0, item);
        Some(id)
    }

    /// Flip the completion flag of the item with the given ID
    ///
    /// # Returns
    /// `true` if an item was toggled, `false` if no such id exists
    /// (a silent no-op, never an error)
    pub fn toggle_complete(&mut self, id: u64) -> bool {
        match self.find_by_id_mut(id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Replace the text of the item with the given ID, verbatim
    ///
    /// Unlike `add`, the new text is NOT trimmed and NOT checked for
    /// emptiness; an item's text may become empty or whitespace-only
    /// through this operation. This asymmetry is part of the observable
    /// contract.
    ///
    /// # Returns
    /// `true` if an item was edited, `false` if no such id exists
    pub fn edit_text(&mut self, id: u64, new_text: &str) -> bool {
        match self.find_by_id_mut(id) {
            Some(item) => {
                item.text = new_text.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove the item with the given ID and return it
    ///
    /// # Returns
    /// The removed item if found, `None` otherwise
    pub fn delete_item(&mut self, id: u64) -> Option<Item> {
        if let Some(pos) = self.items.iter().position(|i| i.id == id) {
            Some(self.items.remove(pos))
        } else {
            None
        }
    }

    /// Remove every completed item
    ///
    /// Remaining items keep their relative order. Idempotent.
    ///
    /// # Returns
    /// The number of items removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|i| !i.completed);
        before - self.items.len()
    }
}
