//! Root composition of the tab selector, todo list and category list.

use crate::categories::{CategoryAction, CategoryReducer, CategoryState};
use crate::environment::AppEnvironment;
use crate::tabs::{Tab, TabAction, TabReducer};
use crate::todos::{TodoAction, TodoReducer, TodoState};
use serde::{Deserialize, Serialize};
use todo_tabs_core::composition::{combine_reducers, scope_reducer, BoxedReducer, CombinedReducer};
use todo_tabs_core::{effect::Effect, reducer::Reducer, SmallVec};
use todo_tabs_runtime::Store;

/// Complete application state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Visible view
    pub tab: Tab,
    /// Todo list and editor
    pub todos: TodoState,
    /// Category list and editor
    pub categories: CategoryState,
}

impl AppState {
    /// Empty lists, no edit in progress, todo view selected
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty lists with the given view selected
    #[must_use]
    pub fn with_tab(tab: Tab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }
}

/// Every action the application understands
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppAction {
    /// Root selector
    Tab(TabAction),
    /// Todo list
    Todo(TodoAction),
    /// Category list
    Category(CategoryAction),
}

impl AppAction {
    /// Variant name of the wrapped action
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Tab(action) => action.name(),
            Self::Todo(action) => action.name(),
            Self::Category(action) => action.name(),
        }
    }
}

impl From<TabAction> for AppAction {
    fn from(action: TabAction) -> Self {
        Self::Tab(action)
    }
}

impl From<TodoAction> for AppAction {
    fn from(action: TodoAction) -> Self {
        Self::Todo(action)
    }
}

impl From<CategoryAction> for AppAction {
    fn from(action: CategoryAction) -> Self {
        Self::Category(action)
    }
}

/// Store running the whole application
pub type AppStore = Store<AppState, AppAction, AppEnvironment, AppReducer>;

/// Reducer for [`AppState`], routing each action to the slice it concerns
pub struct AppReducer {
    inner: CombinedReducer<AppState, AppAction, AppEnvironment>,
}

impl AppReducer {
    /// Builds the root reducer from the three feature reducers
    #[must_use]
    pub fn new() -> Self {
        let tab = scope_reducer(
            TabReducer,
            |state: &mut AppState| &mut state.tab,
            |action: AppAction| match action {
                AppAction::Tab(inner) => Some(inner),
                _ => None,
            },
            AppAction::Tab,
        );
        let todos = scope_reducer(
            TodoReducer::new(),
            |state: &mut AppState| &mut state.todos,
            |action: AppAction| match action {
                AppAction::Todo(inner) => Some(inner),
                _ => None,
            },
            AppAction::Todo,
        );
        let categories = scope_reducer(
            CategoryReducer::new(),
            |state: &mut AppState| &mut state.categories,
            |action: AppAction| match action {
                AppAction::Category(inner) => Some(inner),
                _ => None,
            },
            AppAction::Category,
        );

        let reducers: Vec<BoxedReducer<AppState, AppAction, AppEnvironment>> =
            vec![Box::new(tab), Box::new(todos), Box::new(categories)];

        Self {
            inner: combine_reducers(reducers),
        }
    }
}

impl Default for AppReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppReducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppReducer")
            .field("reducers", &self.inner.len())
            .finish()
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        tracing::trace!(action = action.name(), tab = %state.tab, "Reducing app action");
        self.inner.reduce(state, action, env)
    }
}

/// Creates a store holding `state`, driven by [`AppReducer`]
#[must_use]
pub fn create_store(state: AppState, env: AppEnvironment) -> AppStore {
    Store::new(state, AppReducer::new(), env)
}
