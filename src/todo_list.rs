//! To-do List
//!
//! Ordered backing collection of items and the filtered view derived from
//! search text and filter mode.

use crate::models::{FilterMode, TodoId, TodoItem};

/// Ordered collection of to-do items.
///
/// Items keep insertion order. An item's position is its index, so deleting
/// an item moves every later item up by one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u32,
}

/// Text that trims to nothing is never stored
fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new incomplete item. Blank text is ignored.
    pub fn add(&mut self, text: impl Into<String>) -> Option<TodoId> {
        let text = text.into();
        if is_blank(&text) {
            return None;
        }
        self.next_id += 1;
        let id = TodoId(self.next_id);
        self.items.push(TodoItem::new(id, text));
        Some(id)
    }

    /// Replace an item's text, keeping its completion and position.
    /// Blank text or an unknown id leaves the list untouched.
    pub fn edit(&mut self, id: TodoId, text: impl Into<String>) -> bool {
        let text = text.into();
        if is_blank(&text) {
            return false;
        }
        match self.get_mut(id) {
            Some(item) => {
                item.text = text;
                true
            }
            None => false,
        }
    }

    pub fn toggle_complete(&mut self, id: TodoId) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: TodoId) -> Option<TodoItem> {
        let position = self.position(id)?;
        Some(self.items.remove(position))
    }

    /// Items matching `search_term` (case-insensitive) and `mode`, paired with
    /// their position, in list order.
    pub fn filtered_view(
        &self,
        search_term: &str,
        mode: FilterMode,
    ) -> impl Iterator<Item = (usize, &TodoItem)> + '_ {
        let term = search_term.to_lowercase();
        self.items
            .iter()
            .enumerate()
            .filter(move |(_, item)| mode.accepts(item) && item.text.to_lowercase().contains(&term))
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: TodoId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn id_at(&self, position: usize) -> Option<TodoId> {
        self.items.get(position).map(|item| item.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodoItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }
}
