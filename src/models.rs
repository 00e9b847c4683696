//! Frontend Models
//!
//! Data structures for to-do items and list filtering.

use std::fmt;
use std::str::FromStr;

/// Stable identifier assigned to an item when it is created.
///
/// Ids are never reused, so they keep pointing at the same item after
/// earlier items are deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(pub u32);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry.
///
/// Position is not stored here: it is the item's index in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Which items the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Completed,
    Incomplete,
}

/// Filter options in menu order
pub const FILTER_MODES: &[FilterMode] = &[FilterMode::All, FilterMode::Completed, FilterMode::Incomplete];

impl FilterMode {
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Completed => "Completed",
            FilterMode::Incomplete => "Incomplete",
        }
    }

    pub fn accepts(&self, item: &TodoItem) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Completed => item.completed,
            FilterMode::Incomplete => !item.completed,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FILTER_MODES
            .iter()
            .copied()
            .find(|mode| mode.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown filter mode: {}", s))
    }
}
