//! Task data structure.
//!
//! This module defines the `Task` struct that represents a single to-do entry
//! with its text, category and completion flag.

use serde::{Deserialize, Serialize};

use crate::fields::Category;

/// A single to-do entry.
///
/// Tasks are only created and mutated through the
/// [`TaskListStore`](crate::store::TaskListStore), which keeps `id` unique and
/// `text` non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub category: Category,
    pub completed: bool,
}

impl Task {
    pub(crate) fn new(id: u64, text: String, category: Category) -> Self {
        Self {
            id,
            text,
            category,
            completed: false,
        }
    }

    /// Label used by the list's action column.
    pub fn toggle_label(&self) -> &'static str {
        if self.completed {
            "Uncomplete"
        } else {
            "Complete"
        }
    }
}
