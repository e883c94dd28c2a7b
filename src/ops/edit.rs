//! Text editing for the task list controller

use crate::TaskListController;
use anyhow::Result;

impl TaskListController {
    /// Replace the text of the item with the given id, verbatim, and
    /// persist
    ///
    /// In contrast to `add` there is no trimming and no emptiness check
    /// here; the edited text is stored exactly as passed, even when empty
    /// or whitespace-only. An unknown id is a silent no-op.
    ///
    /// # Returns
    /// `true` if an item was edited
    pub fn edit_text(&mut self, id: u64, new_text: &str) -> Result<bool> {
        if !self.list.edit_text(id, new_text) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }
}
