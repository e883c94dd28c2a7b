use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Get the current timestamp in UTC
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now()
}

/// Priority of a task item
///
/// Serialized as lowercase strings ("high", "medium", "low") to keep the
/// persisted JSON format stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Needs attention before everything else
    High,
    /// The default for new items
    #[default]
    Medium,
    /// Can wait
    Low,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: high, medium, low",
                s
            )),
        }
    }
}

/// A single task item
///
/// Items are created exclusively by the add operation; the persistence load
/// path reconstitutes stored items without minting new identities.
///
/// Field names and types are the persisted JSON contract and must stay
/// stable across versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, generated from the store's monotonic counter
    pub id: u64,
    /// The item text. Non-empty after trimming at creation time; editing
    /// may later make it empty or whitespace-only.
    pub text: String,
    /// Completion flag
    pub completed: bool,
    /// Priority tag
    #[serde(default)]
    pub priority: Priority,
    /// Creation timestamp, set once and immutable thereafter
    ///
    /// Persisted under the JSON key "createdAt".
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Check if this item is still open
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
