//! Serialization and deserialization implementations for TaskList
//!
//! The persisted representation is a bare JSON array of item records, so
//! the slot stays readable by anything that understands the item format.
//! The id counter is not part of the persisted form - it is rebuilt from
//! the stored ids during deserialization.

use super::item::Item;
use super::task_list::TaskList;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for TaskList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TaskList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<Item>::deserialize(deserializer)?;

        // Rebuild the counter so freshly generated ids never collide with
        // stored ones
        let next_id = items.iter().map(|i| i.id).max().unwrap_or(0);

        Ok(TaskList { items, next_id })
    }
}
