//! Read surface for the task list controller

use crate::TaskListController;
use crate::formatting;
use crate::model::{Item, Stats};

impl TaskListController {
    /// The items visible under the current filter, in display order
    ///
    /// A pure, order-preserving subsequence of the collection; computing
    /// it never mutates anything.
    pub fn visible_items(&self) -> Vec<&Item> {
        self.list.visible(self.filter)
    }

    /// Derived statistics over the full collection
    ///
    /// Recomputed on every call; `total == active + completed` always.
    pub fn stats(&self) -> Stats {
        self.list.stats()
    }

    /// Render the visible items plus the summary line as plain text
    pub fn render(&self) -> String {
        let items = self.visible_items();
        format!(
            "{}\n{}",
            formatting::format_items(&items),
            formatting::format_stats(self.stats())
        )
    }
}
