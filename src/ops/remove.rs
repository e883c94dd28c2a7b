//! Item removal for the task list controller

use crate::TaskListController;
use crate::model::Item;
use anyhow::Result;

impl TaskListController {
    /// Remove the item with the given id and persist
    ///
    /// An unknown id is a silent no-op; deleting the same id twice leaves
    /// the collection as after the first call.
    ///
    /// # Returns
    /// The removed item if one existed
    pub fn delete_item(&mut self, id: u64) -> Result<Option<Item>> {
        let Some(removed) = self.list.delete_item(id) else {
            return Ok(None);
        };
        self.persist()?;
        Ok(Some(removed))
    }

    /// Remove every completed item and persist
    ///
    /// Items that are still active keep their relative order. Calling this
    /// twice in a row is the same as calling it once; the second call
    /// removes nothing and writes nothing.
    ///
    /// # Returns
    /// The number of items removed
    pub fn clear_completed(&mut self) -> Result<usize> {
        let count = self.list.clear_completed();
        if count > 0 {
            self.persist()?;
        }
        Ok(count)
    }
}
