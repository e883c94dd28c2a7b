//! Query methods and derived statistics for TaskList
//!
//! This module contains the read-only view computations: the visibility
//! filter and the derived counts. Nothing here mutates the list; the
//! visible set is always a pure, order-preserving subsequence of the
//! collection.

use super::item::Item;
use super::task_list::TaskList;
use std::str::FromStr;

/// Which subset of the collection is currently displayed
///
/// Set only by direct user selection; filtering changes visibility, never
/// the collection itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Show everything
    #[default]
    All,
    /// Show items with `completed == false`
    Active,
    /// Show items with `completed == true`
    Completed,
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            _ => Err(format!(
                "Invalid filter '{}'. Valid options are: all, active, completed",
                s
            )),
        }
    }
}

/// Counts derived from the full collection
///
/// Always recomputed on read, never cached; `total == active + completed`
/// holds for every reachable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl TaskList {
    /// Get the items with `completed == false`, in display order
    pub fn active(&self) -> Vec<&Item> {
        self.items.iter().filter(|i| i.is_active()).collect()
    }

    /// Get the completed items, in display order
    pub fn completed(&self) -> Vec<&Item> {
        self.items.iter().filter(|i| i.completed).collect()
    }

    /// Get the subset of items visible under the given filter
    pub fn visible(&self, filter: Filter) -> Vec<&Item> {
        match filter {
            Filter::All => self.items.iter().collect(),
            Filter::Active => self.active(),
            Filter::Completed => self.completed(),
        }
    }

    /// Compute the derived statistics from the full collection
    pub fn stats(&self) -> Stats {
        let completed = self.items.iter().filter(|i| i.completed).count();
        Stats {
            total: self.items.len(),
            active: self.items.len() - completed,
            completed,
        }
    }
}
