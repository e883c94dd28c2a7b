//! Formatting helper functions for the task list
//!
//! This module contains formatting logic for displaying items and the
//! summary line. Output is plain text; it is the read-only rendering the
//! presentation surface consumes.

use crate::model::{Item, Priority, Stats};

/// Format a list of items into a display string
///
/// # Arguments
/// * `items` - Items to format, in display order
///
/// # Returns
/// Formatted string representation of the items
pub fn format_items(items: &[&Item]) -> String {
    if items.is_empty() {
        return "No items to show".to_string();
    }

    let mut result = String::new();
    for item in items {
        let checkbox = if item.completed { "[x]" } else { "[ ]" };
        result.push_str(&format!(
            "{} #{} {} (priority: {})\n",
            checkbox,
            item.id,
            item.text,
            priority_label(item.priority)
        ));
        result.push_str(&format!("    Created: {}\n", item.created_at));
    }

    result
}

/// Format the derived statistics as a one-line summary
pub fn format_stats(stats: Stats) -> String {
    format!(
        "{} item(s): {} active, {} completed",
        stats.total, stats.active, stats.completed
    )
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "high",
        Priority::Medium => "medium",
        Priority::Low => "low",
    }
}
