//! Text rendering of the visible view.
//!
//! Each view is a `Display` wrapper around borrowed state, so rendering is a
//! pure function of the state and can be asserted on in tests.

use crate::app::AppState;
use crate::categories::CategoryState;
use crate::tabs::Tab;
use crate::todos::{Todo, TodoState};
use std::fmt::{self, Display, Formatter};

/// Title of the todo view
pub const TODO_TITLE: &str = "Todo App";
/// Title of the category view
pub const CATEGORY_TITLE: &str = "Kategorieverwaltung";
/// Commit button while no todo is being edited
pub const ADD_TODO_LABEL: &str = "Todo hinzufügen";
/// Commit button while a todo is being edited
pub const UPDATE_TODO_LABEL: &str = "Todo aktualisieren";
/// Commit button of the category view
pub const ADD_CATEGORY_LABEL: &str = "Kategorie hinzufügen";
/// Shown in place of the category when none is selected
pub const NO_CATEGORY_LABEL: &str = "Kategorie auswählen";

const EMPTY_LIST: &str = "  (keine)";

/// Renders the whole screen for the current state
#[must_use]
pub fn render(state: &AppState) -> String {
    AppView(state).to_string()
}

/// Label of the button that commits the todo draft
#[must_use]
pub const fn commit_label(todos: &TodoState) -> &'static str {
    if todos.is_editing() {
        UPDATE_TODO_LABEL
    } else {
        ADD_TODO_LABEL
    }
}

/// Completion marker shown in front of a todo
#[must_use]
pub const fn completion_marker(todo: &Todo) -> &'static str {
    if todo.completed {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Tab bar followed by the active view
#[derive(Debug, Clone, Copy)]
pub struct AppView<'a>(pub &'a AppState);

impl Display for AppView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let state = self.0;
        writeln!(f, "{}", TabBar(state.tab))?;
        writeln!(f)?;
        match state.tab {
            Tab::Todos => write!(
                f,
                "{}",
                TodoView {
                    todos: &state.todos,
                    categories: &state.categories,
                }
            ),
            Tab::Categories => write!(f, "{}", CategoryView(&state.categories)),
        }
    }
}

/// Both tab buttons, the active one bracketed
#[derive(Debug, Clone, Copy)]
pub struct TabBar(pub Tab);

impl Display for TabBar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let tabs = [Tab::Todos, Tab::Categories];
        for (i, tab) in tabs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if *tab == self.0 {
                write!(f, "[{tab}]")?;
            } else {
                write!(f, " {tab} ")?;
            }
        }
        Ok(())
    }
}

/// Todo editor and list
///
/// The category picker offers the names currently in the category list.
#[derive(Debug, Clone, Copy)]
pub struct TodoView<'a> {
    /// Todo slice of the state
    pub todos: &'a TodoState,
    /// Categories offered by the picker
    pub categories: &'a CategoryState,
}

impl Display for TodoView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let draft = &self.todos.draft;

        writeln!(f, "{TODO_TITLE}")?;
        writeln!(f, "Todo eingeben: {}", draft.text)?;
        writeln!(f, "Kurzbeschreibung: {}", draft.short_description)?;
        writeln!(f, "Langbeschreibung: {}", draft.long_description)?;
        if draft.category.is_empty() {
            writeln!(f, "Kategorie: <{NO_CATEGORY_LABEL}>")?;
        } else {
            writeln!(f, "Kategorie: {}", draft.category)?;
        }
        if !self.categories.categories.is_empty() {
            writeln!(f, "  Auswahl: {}", self.categories.categories.join(" | "))?;
        }
        writeln!(f, "<{}>", commit_label(self.todos))?;
        writeln!(f)?;

        writeln!(f, "Todos:")?;
        if self.todos.todos.is_empty() {
            writeln!(f, "{EMPTY_LIST}")?;
        }
        for (index, todo) in self.todos.todos.iter().enumerate() {
            let editing = if self.todos.editing_index() == Some(index) {
                " *"
            } else {
                ""
            };
            writeln!(f, "{index:>3} {}{editing}", completion_marker(todo))?;
            writeln!(f, "      Todo: {}", todo.text)?;
            writeln!(f, "      Kategorie: {}", todo.category)?;
            writeln!(f, "      Kurzbeschreibung: {}", todo.short_description)?;
            writeln!(f, "      Langbeschreibung: {}", todo.long_description)?;
        }
        Ok(())
    }
}

/// Category editor and list
#[derive(Debug, Clone, Copy)]
pub struct CategoryView<'a>(pub &'a CategoryState);

impl Display for CategoryView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let state = self.0;

        writeln!(f, "{CATEGORY_TITLE}")?;
        writeln!(f, "Kategorie eingeben: {}", state.input)?;
        writeln!(f, "<{ADD_CATEGORY_LABEL}>")?;
        writeln!(f)?;

        writeln!(f, "Kategorien:")?;
        if state.categories.is_empty() {
            writeln!(f, "{EMPTY_LIST}")?;
        }
        for (index, name) in state.categories.iter().enumerate() {
            writeln!(f, "{index:>3} {name}")?;
        }
        Ok(())
    }
}
