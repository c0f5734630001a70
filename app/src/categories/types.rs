//! Domain types for category management.

use serde::{Deserialize, Serialize};
use todo_tabs_macros::Action;

/// State of the category editor and list
///
/// Categories are plain labels. Duplicates are allowed and nothing links a
/// category to the todos that copied its name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryState {
    /// All categories in display order
    pub categories: Vec<String>,
    /// Unsubmitted input field
    pub input: String,
}

impl CategoryState {
    /// Creates an empty category list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding the given names
    #[must_use]
    pub fn with_categories<I, T>(names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            categories: names.into_iter().map(Into::into).collect(),
            input: String::new(),
        }
    }

    /// Returns the category at a position
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.categories.get(index).map(String::as_str)
    }

    /// Returns true if a category with this exact name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }
}

/// Actions representing commands and events for the category list
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryAction {
    // ========== Commands ==========
    /// Command: Append the input as a new category
    #[command]
    CommitCategory,

    /// Command: Move a category back into the input field
    #[command]
    EditCategory {
        /// Position of the category
        index: usize,
    },

    /// Command: Remove a category
    #[command]
    DeleteCategory {
        /// Position of the category
        index: usize,
    },

    // ========== Events ==========
    /// Event: The input field changed
    #[event]
    InputChanged {
        /// The new content
        value: String,
    },

    /// Event: A category was appended
    #[event]
    CategoryAdded {
        /// The trimmed name
        name: String,
    },

    /// Event: A category was removed
    #[event]
    CategoryDeleted {
        /// Position of the category
        index: usize,
    },
}
