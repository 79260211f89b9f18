//! In-memory todo list.
//!
//! Holds the ordered items and enforces the dense-id rule: after every
//! successful mutation the ids are exactly `1..=len`.

use serde::Serialize;
use tracing::info;

use crate::error::{Result, TodoError};
use crate::model::TodoItem;

/// Ordered todo items. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap items exactly as stored, without renumbering.
    #[must_use]
    pub fn from_items(items: Vec<TodoItem>) -> Self {
        Self { items }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append a new item and return its assigned id (`len + 1`).
    ///
    /// A list loaded with gapped ids is renumbered first so the new id cannot
    /// collide with a stored one.
    pub fn add(&mut self, text: impl Into<String>) -> u64 {
        if !self.is_dense() {
            self.renumber();
        }
        let id = self.next_id();
        self.items.push(TodoItem::new(id, text));
        info!(id, "Added todo item");
        id
    }

    /// Delete the item with `id` and renumber the rest to `1..=len`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId` if no item carries `id`.
    pub fn remove(&mut self, id: u64) -> Result<TodoItem> {
        let index = self.find_index_by_id(id)?;
        let removed = self.items.remove(index);
        self.renumber();
        info!(id, remaining = self.items.len(), "Removed todo item");
        Ok(removed)
    }

    /// Replace the text of the item with `id`. Ids are untouched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId` if no item carries `id`.
    pub fn change(&mut self, id: u64, text: impl Into<String>) -> Result<&TodoItem> {
        let index = self.find_index_by_id(id)?;
        let item = &mut self.items[index];
        item.text = text.into();
        info!(id, "Changed todo item");
        Ok(item)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Position of the item whose stored id equals `id`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId` if no item carries `id`.
    pub fn find_index_by_id(&self, id: u64) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(TodoError::InvalidId { id })
    }

    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<TodoItem> {
        self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the ids are exactly `1..=len` in order.
    #[must_use]
    pub fn is_dense(&self) -> bool {
        self.items
            .iter()
            .zip(1_u64..)
            .all(|(item, expected)| item.id == expected)
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    fn next_id(&self) -> u64 {
        self.items.len() as u64 + 1
    }

    fn renumber(&mut self) {
        for (item, id) in self.items.iter_mut().zip(1_u64..) {
            item.id = id;
        }
    }
}
