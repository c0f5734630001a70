//! Domain types for the to-do list.
//!
//! The list is an ordered sequence of [`Todo`] records. The UI addresses
//! records by position; each record also carries a stable [`TodoId`] so an
//! edit in progress knows which record it started from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todo_tabs_macros::Action;
use uuid::Uuid;

/// Unique identifier for a todo record
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random `TodoId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Stable identifier
    pub id: TodoId,
    /// Short title
    pub text: String,
    /// Optional one-line description
    pub short_description: String,
    /// Optional longer description
    pub long_description: String,
    /// Category name, copied by value when the record was written
    pub category: String,
    /// When the record was last written
    pub due_date: DateTime<Utc>,
    /// Whether the todo is done
    pub completed: bool,
}

impl Todo {
    /// Builds an open todo from a draft
    #[must_use]
    pub fn from_draft(id: TodoId, draft: TodoDraft, due_date: DateTime<Utc>) -> Self {
        Self {
            id,
            text: draft.text,
            short_description: draft.short_description,
            long_description: draft.long_description,
            category: draft.category,
            due_date,
            completed: false,
        }
    }
}

/// The form fields of the todo editor
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDraft {
    /// Title input
    pub text: String,
    /// Short description input
    pub short_description: String,
    /// Long description input
    pub long_description: String,
    /// Selected category; empty means nothing is selected
    pub category: String,
}

impl TodoDraft {
    /// Returns the draft with every field trimmed
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            text: self.text.trim().to_string(),
            short_description: self.short_description.trim().to_string(),
            long_description: self.long_description.trim().to_string(),
            category: self.category.trim().to_string(),
        }
    }

    /// Returns true when nothing has been typed or selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.short_description.is_empty()
            && self.long_description.is_empty()
            && self.category.is_empty()
    }

    /// Sets one of the free-text fields
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Text => self.text = value,
            DraftField::ShortDescription => self.short_description = value,
            DraftField::LongDescription => self.long_description = value,
        }
    }
}

impl From<&Todo> for TodoDraft {
    fn from(todo: &Todo) -> Self {
        Self {
            text: todo.text.clone(),
            short_description: todo.short_description.clone(),
            long_description: todo.long_description.clone(),
            category: todo.category.clone(),
        }
    }
}

/// Free-text fields of the draft
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftField {
    /// The title
    Text,
    /// The short description
    ShortDescription,
    /// The long description
    LongDescription,
}

/// Whether the draft creates a new todo or overwrites an existing one
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditMode {
    /// Committing appends a new todo
    #[default]
    Idle,
    /// Committing replaces the todo at `index`
    Editing {
        /// Position of the record being edited
        index: usize,
        /// Identity of the record when editing began
        id: TodoId,
    },
}

/// State of the todo editor and list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All todos in display order
    pub todos: Vec<Todo>,
    /// Unsubmitted form input
    pub draft: TodoDraft,
    /// Add vs. update
    pub edit_mode: EditMode,
}

impl TodoState {
    /// Creates an empty list with an empty draft and no edit in progress
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Returns the todo at a position
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Todo> {
        self.todos.get(index)
    }

    /// Returns the current position of a todo
    #[must_use]
    pub fn position_of(&self, id: &TodoId) -> Option<usize> {
        self.todos.iter().position(|t| &t.id == id)
    }

    /// Position being edited, if any
    #[must_use]
    pub const fn editing_index(&self) -> Option<usize> {
        match &self.edit_mode {
            EditMode::Idle => None,
            EditMode::Editing { index, .. } => Some(*index),
        }
    }

    /// Returns true while an existing todo is loaded into the draft
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.edit_mode, EditMode::Editing { .. })
    }
}

/// Actions representing commands and events for the todo list
///
/// Commands may be ignored by the reducer when their input is not usable;
/// events are applied as they are.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    // ========== Commands ==========
    /// Command: Save the draft, as a new todo or over the one being edited
    #[command]
    CommitTodo,

    /// Command: Load a todo into the draft for editing
    #[command]
    BeginEdit {
        /// Position of the todo
        index: usize,
    },

    /// Command: Flip the completed flag of a todo
    #[command]
    ToggleCompleted {
        /// Position of the todo
        index: usize,
    },

    /// Command: Remove a todo
    #[command]
    DeleteTodo {
        /// Position of the todo
        index: usize,
    },

    // ========== Events ==========
    /// Event: A draft text field changed
    #[event]
    DraftFieldChanged {
        /// Which field
        field: DraftField,
        /// The new content
        value: String,
    },

    /// Event: A category was picked for the draft
    #[event]
    CategorySelected {
        /// The category name, empty to clear the selection
        category: String,
    },

    /// Event: A todo was appended
    #[event]
    TodoAdded {
        /// The new record
        todo: Todo,
    },

    /// Event: A todo was overwritten in place
    #[event]
    TodoReplaced {
        /// Position of the record
        index: usize,
        /// The new record
        todo: Todo,
    },

    /// Event: A todo was loaded into the draft
    #[event]
    EditStarted {
        /// Position of the record
        index: usize,
    },

    /// Event: A todo's completed flag flipped
    #[event]
    CompletionToggled {
        /// Position of the record
        index: usize,
    },

    /// Event: A todo was removed
    #[event]
    TodoDeleted {
        /// Position of the record
        index: usize,
    },
}
