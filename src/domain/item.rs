//! The todo item record

use serde::{Deserialize, Serialize};

/// A single todo item owned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    //=== Identity ===
    /// Opaque unique identifier, fixed at creation
    pub id: String,

    //=== Payload ===
    /// Caller-supplied text; may be empty
    pub content: String,

    /// Whether the item has been marked done
    pub completed: bool,

    //=== Timestamps ===
    /// ISO-8601, set once at creation
    pub created_at: String,

    /// ISO-8601, refreshed on every toggle
    pub updated_at: String,
}

impl Item {
    /// Build a fresh, incomplete item stamped with a single instant
    pub fn new(id: String, content: String, now: String) -> Self {
        Self {
            id,
            content,
            completed: false,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Flip the completion flag and record when it happened
    pub(crate) fn toggle(&mut self, now: String) {
        self.completed = !self.completed;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = Item::new("a".to_string(), "buy milk".to_string(), "2026-01-01T00:00:00.000Z".to_string());
        assert_eq!(item.id, "a");
        assert_eq!(item.content, "buy milk");
        assert!(!item.completed);
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn test_toggle_flips_and_stamps() {
        let mut item = Item::new("a".to_string(), String::new(), "2026-01-01T00:00:00.000Z".to_string());
        item.toggle("2026-01-01T00:00:01.000Z".to_string());
        assert!(item.completed);
        assert_eq!(item.created_at, "2026-01-01T00:00:00.000Z");
        assert_eq!(item.updated_at, "2026-01-01T00:00:01.000Z");

        item.toggle("2026-01-01T00:00:02.000Z".to_string());
        assert!(!item.completed);
        assert_eq!(item.updated_at, "2026-01-01T00:00:02.000Z");
    }

    #[test]
    fn test_serialized_field_names() {
        let item = Item::new("a".to_string(), "x".to_string(), "2026-01-01T00:00:00.000Z".to_string());
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "a",
                "content": "x",
                "completed": false,
                "created_at": "2026-01-01T00:00:00.000Z",
                "updated_at": "2026-01-01T00:00:00.000Z",
            })
        );
    }
}
