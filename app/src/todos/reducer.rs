//! Reducer logic for the todo list.
//!
//! Commands are checked against the current state and turned into events;
//! events are applied to state. A command whose input is unusable leaves the
//! state untouched and reports nothing to the caller. The reason only shows up
//! in the debug log.

use crate::environment::AppEnvironment;
use crate::todos::types::{EditMode, Todo, TodoAction, TodoDraft, TodoId, TodoState};
use thiserror::Error;
use todo_tabs_core::{effect::Effect, reducer::Reducer, SmallVec};

/// Why a todo command was ignored
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Ignored {
    /// The draft title is blank after trimming
    #[error("todo text is blank")]
    BlankText,
    /// No category is selected
    #[error("no category selected")]
    BlankCategory,
    /// The edited record is no longer at the remembered position
    #[error("todo being edited is no longer at index {0}")]
    StaleEdit(usize),
    /// The position does not exist
    #[error("no todo at index {index} (list has {len})")]
    OutOfRange {
        /// Requested position
        index: usize,
        /// Current list length
        len: usize,
    },
}

/// Reducer for the todo list
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a `CommitTodo` command against the trimmed draft
    fn validate_commit(state: &TodoState, draft: &TodoDraft) -> Result<(), Ignored> {
        if draft.text.is_empty() {
            return Err(Ignored::BlankText);
        }

        if draft.category.is_empty() {
            return Err(Ignored::BlankCategory);
        }

        if let EditMode::Editing { index, id } = &state.edit_mode {
            if state.get(*index).is_none_or(|todo| &todo.id != id) {
                return Err(Ignored::StaleEdit(*index));
            }
        }

        Ok(())
    }

    /// Validates a command that addresses an existing todo
    fn validate_index(state: &TodoState, index: usize) -> Result<(), Ignored> {
        let len = state.todos.len();
        if index >= len {
            return Err(Ignored::OutOfRange { index, len });
        }
        Ok(())
    }

    /// Turns a command into the event that carries it out
    fn decide(state: &TodoState, action: &TodoAction, env: &AppEnvironment) -> Result<TodoAction, Ignored> {
        match action {
            TodoAction::CommitTodo => {
                let draft = state.draft.trimmed();
                Self::validate_commit(state, &draft)?;

                let now = env.clock.now();
                let event = match &state.edit_mode {
                    EditMode::Idle => TodoAction::TodoAdded {
                        todo: Todo::from_draft(TodoId::new(), draft, now),
                    },
                    EditMode::Editing { index, id } => TodoAction::TodoReplaced {
                        index: *index,
                        todo: Todo::from_draft(id.clone(), draft, now),
                    },
                };
                Ok(event)
            },
            TodoAction::BeginEdit { index } => {
                Self::validate_index(state, *index)?;
                Ok(TodoAction::EditStarted { index: *index })
            },
            TodoAction::ToggleCompleted { index } => {
                Self::validate_index(state, *index)?;
                Ok(TodoAction::CompletionToggled { index: *index })
            },
            // Deleting always leaves edit mode, even when nothing is removed
            TodoAction::DeleteTodo { index } => Ok(TodoAction::TodoDeleted { index: *index }),
            event => Ok(event.clone()),
        }
    }

    /// Applies an event to state
    fn apply_event(state: &mut TodoState, event: TodoAction) {
        tracing::trace!(event = event.name(), "Applying todo event");

        match event {
            TodoAction::DraftFieldChanged { field, value } => {
                state.draft.set(field, value);
            },
            TodoAction::CategorySelected { category } => {
                state.draft.category = category;
            },
            TodoAction::TodoAdded { todo } => {
                state.todos.push(todo);
                state.draft = TodoDraft::default();
                state.edit_mode = EditMode::Idle;
            },
            TodoAction::TodoReplaced { index, todo } => {
                if let Some(slot) = state.todos.get_mut(index) {
                    *slot = todo;
                }
                state.draft = TodoDraft::default();
                state.edit_mode = EditMode::Idle;
            },
            TodoAction::EditStarted { index } => {
                if let Some(todo) = state.todos.get(index) {
                    state.draft = TodoDraft::from(todo);
                    state.edit_mode = EditMode::Editing {
                        index,
                        id: todo.id.clone(),
                    };
                }
            },
            TodoAction::CompletionToggled { index } => {
                if let Some(todo) = state.todos.get_mut(index) {
                    todo.completed = !todo.completed;
                }
            },
            TodoAction::TodoDeleted { index } => {
                if index < state.todos.len() {
                    state.todos.remove(index);
                }
                state.edit_mode = EditMode::Idle;
            },
            // Commands are not applied to state
            TodoAction::CommitTodo
            | TodoAction::BeginEdit { .. }
            | TodoAction::ToggleCompleted { .. }
            | TodoAction::DeleteTodo { .. } => {},
        }
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match Self::decide(state, &action, env) {
            Ok(event) => Self::apply_event(state, event),
            Err(reason) => {
                tracing::debug!(command = action.name(), %reason, "Ignoring todo command");
            },
        }

        SmallVec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todos::types::DraftField;
    use chrono::Duration;
    use std::sync::Arc;
    use todo_tabs_testing::{assertions, test_clock, test_epoch, ReducerTest, SteppingClock};

    fn create_test_env() -> AppEnvironment {
        AppEnvironment::new(Arc::new(test_clock()))
    }

    fn fill_draft(text: &str, category: &str) -> Vec<TodoAction> {
        vec![
            TodoAction::DraftFieldChanged {
                field: DraftField::Text,
                value: text.to_string(),
            },
            TodoAction::CategorySelected {
                category: category.to_string(),
            },
        ]
    }

    fn todo(text: &str, category: &str) -> Todo {
        Todo::from_draft(
            TodoId::new(),
            TodoDraft {
                text: text.to_string(),
                category: category.to_string(),
                ..TodoDraft::default()
            },
            test_epoch(),
        )
    }

    fn state_with(todos: Vec<Todo>) -> TodoState {
        TodoState {
            todos,
            ..TodoState::new()
        }
    }

    #[test]
    fn test_commit_appends_new_todo() {
        let mut actions = fill_draft("Buy milk", "Work");
        actions.push(TodoAction::DraftFieldChanged {
            field: DraftField::ShortDescription,
            value: "2 litres".to_string(),
        });
        actions.push(TodoAction::CommitTodo);

        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .when_actions(actions)
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                let todo = &state.todos[0];
                assert_eq!(todo.text, "Buy milk");
                assert_eq!(todo.category, "Work");
                assert_eq!(todo.short_description, "2 litres");
                assert!(todo.long_description.is_empty());
                assert!(!todo.completed);
                assert_eq!(todo.due_date, test_epoch());
                // Form is reset after a successful commit
                assert!(state.draft.is_empty());
                assert_eq!(state.edit_mode, EditMode::Idle);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_commit_appends_at_end() {
        let mut actions = fill_draft("Second", "Home");
        actions.push(TodoAction::CommitTodo);

        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(vec![todo("First", "Work")]))
            .when_actions(actions)
            .then_state(|state| {
                let texts: Vec<&str> = state.todos.iter().map(|t| t.text.as_str()).collect();
                assert_eq!(texts, vec!["First", "Second"]);
            })
            .run();
    }

    #[test]
    fn test_commit_stores_trimmed_fields() {
        let mut actions = fill_draft("  Call Bob  ", " Work ");
        actions.push(TodoAction::CommitTodo);

        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .when_actions(actions)
            .then_state(|state| {
                assert_eq!(state.todos[0].text, "Call Bob");
                assert_eq!(state.todos[0].category, "Work");
            })
            .run();
    }

    #[test]
    fn test_commit_with_blank_text_is_ignored() {
        let mut actions = fill_draft("   ", "Work");
        actions.push(TodoAction::CommitTodo);

        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .when_actions(actions)
            .then_state(|state| {
                assert_eq!(state.count(), 0);
                // The draft is kept so the user can fix it
                assert_eq!(state.draft.category, "Work");
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_commit_without_category_is_ignored() {
        let mut actions = fill_draft("Buy milk", "");
        actions.push(TodoAction::CommitTodo);

        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .when_actions(actions)
            .then_state(|state| {
                assert_eq!(state.count(), 0);
                assert_eq!(state.draft.text, "Buy milk");
            })
            .run();
    }

    #[test]
    fn test_begin_edit_loads_draft() {
        let first = todo("First", "Work");
        let second = todo("Second", "Home");
        let second_id = second.id.clone();

        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(vec![first, second]))
            .when_action(TodoAction::BeginEdit { index: 1 })
            .then_state(move |state| {
                assert_eq!(state.draft.text, "Second");
                assert_eq!(state.draft.category, "Home");
                assert_eq!(
                    state.edit_mode,
                    EditMode::Editing {
                        index: 1,
                        id: second_id
                    }
                );
            })
            .run();
    }

    #[test]
    fn test_begin_edit_out_of_range_is_ignored() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(vec![todo("Only", "Work")]))
            .when_action(TodoAction::BeginEdit { index: 5 })
            .then_state(|state| {
                assert!(!state.is_editing());
                assert!(state.draft.is_empty());
            })
            .run();
    }

    #[test]
    fn test_second_begin_edit_retargets() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(vec![todo("A", "Work"), todo("B", "Home")]))
            .when_action(TodoAction::BeginEdit { index: 0 })
            .when_action(TodoAction::DraftFieldChanged {
                field: DraftField::Text,
                value: "unsaved".to_string(),
            })
            .when_action(TodoAction::BeginEdit { index: 1 })
            .then_state(|state| {
                assert_eq!(state.editing_index(), Some(1));
                assert_eq!(state.draft.text, "B");
                assert_eq!(state.todos[0].text, "A");
            })
            .run();
    }

    #[test]
    fn test_commit_while_editing_replaces_in_place() {
        let mut original = todo("Old", "Work");
        original.completed = true;
        let original_id = original.id.clone();

        ReducerTest::new(TodoReducer::new())
            .with_env(AppEnvironment::new(Arc::new(SteppingClock::new(
                test_epoch() + Duration::days(1),
                60,
            ))))
            .given_state(state_with(vec![todo("Before", "Home"), original, todo("After", "Home")]))
            .when_action(TodoAction::BeginEdit { index: 1 })
            .when_action(TodoAction::DraftFieldChanged {
                field: DraftField::Text,
                value: " New ".to_string(),
            })
            .when_action(TodoAction::CommitTodo)
            .then_state(move |state| {
                assert_eq!(state.count(), 3);
                assert_eq!(state.todos[0].text, "Before");
                assert_eq!(state.todos[2].text, "After");

                let edited = &state.todos[1];
                assert_eq!(edited.id, original_id);
                assert_eq!(edited.text, "New");
                assert_eq!(edited.category, "Work");
                // Full overwrite: completion and due date are reset
                assert!(!edited.completed);
                assert_eq!(edited.due_date, test_epoch() + Duration::days(1));

                assert_eq!(state.edit_mode, EditMode::Idle);
                assert!(state.draft.is_empty());
            })
            .run();
    }

    #[test]
    fn test_blank_commit_while_editing_keeps_edit_mode() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(vec![todo("Keep", "Work")]))
            .when_action(TodoAction::BeginEdit { index: 0 })
            .when_action(TodoAction::DraftFieldChanged {
                field: DraftField::Text,
                value: String::new(),
            })
            .when_action(TodoAction::CommitTodo)
            .then_state(|state| {
                assert_eq!(state.todos[0].text, "Keep");
                assert_eq!(state.editing_index(), Some(0));
            })
            .run();
    }

    #[test]
    fn test_commit_with_stale_edit_is_ignored() {
        let kept = todo("Kept", "Work");
        let mut state = state_with(vec![kept]);
        state.draft = TodoDraft {
            text: "Changed".to_string(),
            category: "Work".to_string(),
            ..TodoDraft::default()
        };
        state.edit_mode = EditMode::Editing {
            index: 0,
            id: TodoId::new(),
        };

        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state)
            .when_action(TodoAction::CommitTodo)
            .then_state(|state| {
                assert_eq!(state.todos[0].text, "Kept");
                assert_eq!(state.draft.text, "Changed");
            })
            .run();
    }

    #[test]
    fn test_toggle_completed_flips_flag() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(vec![todo("A", "Work"), todo("B", "Work")]))
            .when_action(TodoAction::ToggleCompleted { index: 1 })
            .then_state(|state| {
                assert!(!state.todos[0].completed);
                assert!(state.todos[1].completed);
                assert_eq!(state.completed_count(), 1);
            })
            .run();
    }

    #[test]
    fn test_toggle_twice_restores() {
        let original = state_with(vec![todo("A", "Work")]);
        let expected = original.clone();

        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(original)
            .when_action(TodoAction::ToggleCompleted { index: 0 })
            .when_action(TodoAction::ToggleCompleted { index: 0 })
            .then_state(move |state| {
                assert_eq!(state, &expected);
            })
            .run();
    }

    #[test]
    fn test_delete_shifts_later_entries() {
        let a = todo("A", "Work");
        let c = todo("C", "Work");
        let (a_id, c_id) = (a.id.clone(), c.id.clone());

        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(vec![a, todo("B", "Work"), c]))
            .when_action(TodoAction::DeleteTodo { index: 1 })
            .then_state(move |state| {
                assert_eq!(state.count(), 2);
                assert_eq!(state.todos[0].id, a_id);
                assert_eq!(state.todos[1].id, c_id);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_delete_other_index_ends_edit() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(vec![todo("A", "Work"), todo("B", "Work")]))
            .when_action(TodoAction::BeginEdit { index: 0 })
            .when_action(TodoAction::DeleteTodo { index: 1 })
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                assert_eq!(state.edit_mode, EditMode::Idle);
                // The loaded draft stays in the form
                assert_eq!(state.draft.text, "A");
            })
            .run();
    }

    #[test]
    fn test_delete_out_of_range_still_ends_edit() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(vec![todo("A", "Work")]))
            .when_action(TodoAction::BeginEdit { index: 0 })
            .when_action(TodoAction::DeleteTodo { index: 9 })
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                assert!(!state.is_editing());
            })
            .run();
    }

    #[test]
    fn test_commit_after_delete_appends() {
        let mut actions = vec![
            TodoAction::BeginEdit { index: 0 },
            TodoAction::DeleteTodo { index: 0 },
        ];
        actions.extend(fill_draft("Fresh", "Home"));
        actions.push(TodoAction::CommitTodo);

        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(vec![todo("A", "Work"), todo("B", "Work")]))
            .when_actions(actions)
            .then_state(|state| {
                let texts: Vec<&str> = state.todos.iter().map(|t| t.text.as_str()).collect();
                assert_eq!(texts, vec!["B", "Fresh"]);
            })
            .run();
    }

    #[test]
    fn test_event_application() {
        let added = todo("Replayed", "Work");

        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .when_action(TodoAction::TodoAdded { todo: added.clone() })
            .then_state(move |state| {
                assert_eq!(state.todos, vec![added]);
            })
            .run();
    }

    #[test]
    fn test_ignored_reasons() {
        let state = state_with(vec![todo("A", "Work")]);
        let env = create_test_env();

        assert_eq!(
            TodoReducer::decide(&state, &TodoAction::CommitTodo, &env),
            Err(Ignored::BlankText)
        );
        assert_eq!(
            TodoReducer::decide(&state, &TodoAction::ToggleCompleted { index: 1 }, &env),
            Err(Ignored::OutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            Ignored::OutOfRange { index: 1, len: 1 }.to_string(),
            "no todo at index 1 (list has 1)"
        );
    }
}
