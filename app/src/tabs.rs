//! The root selector: which of the two views is visible.

use crate::environment::AppEnvironment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use todo_tabs_core::{effect::Effect, reducer::Reducer, SmallVec};
use todo_tabs_macros::Action;

/// The active view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Todo editor and list
    #[default]
    Todos,
    /// Category editor and list
    Categories,
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Todos => write!(f, "Todos"),
            Self::Categories => write!(f, "Kategorien"),
        }
    }
}

/// Error returned when a tab name is not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tab '{0}' (expected 'todos' or 'kategorien')")]
pub struct ParseTabError(pub String);

impl FromStr for Tab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todos" | "todo" => Ok(Self::Todos),
            "kategorien" | "categories" => Ok(Self::Categories),
            other => Err(ParseTabError(other.to_string())),
        }
    }
}

/// Actions for the root selector
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabAction {
    /// Command: Show a view
    #[command]
    SelectTab {
        /// The view to show
        tab: Tab,
    },
}

/// Reducer for the root selector
#[derive(Clone, Debug, Default)]
pub struct TabReducer;

impl Reducer for TabReducer {
    type State = Tab;
    type Action = TabAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TabAction::SelectTab { tab } => *state = tab,
        }
        SmallVec::new()
    }
}
