//! Completion toggling for the task list controller

use crate::TaskListController;
use anyhow::Result;

impl TaskListController {
    /// Flip the completion flag of the item with the given id and persist
    ///
    /// An unknown id is a silent no-op: nothing changes, nothing is
    /// written, no error is raised.
    ///
    /// # Returns
    /// `true` if an item was toggled
    pub fn toggle_complete(&mut self, id: u64) -> Result<bool> {
        if !self.list.toggle_complete(id) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }
}
