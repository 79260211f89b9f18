//! Core data types for todo-lib.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry of the todo list.
///
/// `id` is a 1-based position, not a stable identifier: removing an item
/// renumbers everything after it. Reads accept any non-negative id; a zero or
/// gapped id is renumbered by the next mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    /// Older documents stored the text under `task`.
    #[serde(alias = "task")]
    pub text: String,
}

impl TodoItem {
    #[must_use]
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_id_and_text() {
        let item = TodoItem::new(1, "buy milk");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":1,"text":"buy milk"}"#);
    }

    #[test]
    fn test_accepts_legacy_task_key() {
        let item: TodoItem = serde_json::from_str(r#"{"id":3,"task":"water the dog"}"#).unwrap();
        assert_eq!(item, TodoItem::new(3, "water the dog"));
    }

    #[test]
    fn test_rejects_negative_id() {
        let result: Result<TodoItem, _> = serde_json::from_str(r#"{"id":-1,"text":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_id_is_accepted_on_read() {
        let item: TodoItem = serde_json::from_str(r#"{"id":0,"text":"x"}"#).unwrap();
        assert_eq!(item.id, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(TodoItem::new(2, "c").to_string(), "2: c");
    }
}
