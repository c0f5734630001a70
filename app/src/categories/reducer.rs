//! Reducer logic for the category list.

use crate::categories::types::{CategoryAction, CategoryState};
use crate::environment::AppEnvironment;
use thiserror::Error;
use todo_tabs_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Why a category command was ignored
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Ignored {
    /// The input is blank after trimming
    #[error("category input is blank")]
    BlankInput,
    /// The position does not exist
    #[error("no category at index {index} (list has {len})")]
    OutOfRange {
        /// Requested position
        index: usize,
        /// Current list length
        len: usize,
    },
}

/// Events produced by a single category command
type Events = SmallVec<[CategoryAction; 2]>;

/// Reducer for the category list
#[derive(Clone, Debug, Default)]
pub struct CategoryReducer;

impl CategoryReducer {
    /// Creates a new `CategoryReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn decide(state: &CategoryState, action: CategoryAction) -> Result<Events, Ignored> {
        match action {
            CategoryAction::CommitCategory => {
                let name = state.input.trim();
                if name.is_empty() {
                    return Err(Ignored::BlankInput);
                }
                Ok(smallvec![CategoryAction::CategoryAdded {
                    name: name.to_string()
                }])
            },
            // Editing takes the entry out of the list; committing it again appends at the end
            CategoryAction::EditCategory { index } => {
                let name = Self::existing(state, index)?;
                Ok(smallvec![
                    CategoryAction::InputChanged {
                        value: name.to_string()
                    },
                    CategoryAction::CategoryDeleted { index },
                ])
            },
            CategoryAction::DeleteCategory { index } => {
                Self::existing(state, index)?;
                Ok(smallvec![CategoryAction::CategoryDeleted { index }])
            },
            event => Ok(smallvec![event]),
        }
    }

    fn existing(state: &CategoryState, index: usize) -> Result<&str, Ignored> {
        state.get(index).ok_or(Ignored::OutOfRange {
            index,
            len: state.categories.len(),
        })
    }

    fn apply_event(state: &mut CategoryState, event: CategoryAction) {
        tracing::trace!(event = event.name(), "Applying category event");

        match event {
            CategoryAction::InputChanged { value } => state.input = value,
            CategoryAction::CategoryAdded { name } => {
                state.categories.push(name);
                state.input.clear();
            },
            CategoryAction::CategoryDeleted { index } => {
                if index < state.categories.len() {
                    state.categories.remove(index);
                }
            },
            CategoryAction::CommitCategory
            | CategoryAction::EditCategory { .. }
            | CategoryAction::DeleteCategory { .. } => {},
        }
    }
}

impl Reducer for CategoryReducer {
    type State = CategoryState;
    type Action = CategoryAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let command = action.name();

        match Self::decide(state, action) {
            Ok(events) => {
                for event in events {
                    Self::apply_event(state, event);
                }
            },
            Err(reason) => tracing::debug!(command, %reason, "Ignoring category command"),
        }

        SmallVec::new()
    }
}
