//! Add operation for the task list controller

use crate::TaskListController;
use crate::model::Priority;
use anyhow::Result;

impl TaskListController {
    /// Add a new item to the front of the collection and persist
    ///
    /// The text is trimmed before storing; when the trimmed text is empty
    /// nothing happens at all - no item, no save, no staging reset. When
    /// no priority is given the currently staged one is used. A successful
    /// add clears the staged text and puts the staged priority back to its
    /// default.
    ///
    /// # Arguments
    /// * `text` - The item text
    /// * `priority` - Priority for the new item, or `None` to use the
    ///   staged priority
    ///
    /// # Returns
    /// The id of the new item, or `None` when the text was empty after
    /// trimming
    pub fn add(&mut self, text: &str, priority: Option<Priority>) -> Result<Option<u64>> {
        let priority = priority.unwrap_or(self.staged_priority());

        let Some(id) = self.list.add(text, priority) else {
            return Ok(None);
        };

        self.reset_staging();
        self.persist()?;
        Ok(Some(id))
    }

    /// Commit the staged input text as a new item
    ///
    /// This is the add-button path: the staged text becomes the item, the
    /// staged priority tags it, and the staging is reset afterwards.
    pub fn add_staged(&mut self) -> Result<Option<u64>> {
        let text = self.staged_text().to_string();
        self.add(&text, None)
    }
}
