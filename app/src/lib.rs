//! Category-partitioned to-do list driven by reducers.
//!
//! The application holds two lists behind a tab switch:
//!
//! - a todo editor and list ([`todos`]), where each todo is filed under a
//!   category name copied by value
//! - a category editor and list ([`categories`])
//!
//! All state lives in memory. Every change goes through an [`AppAction`]
//! sent to an [`AppStore`]; input the reducers cannot use is ignored and
//! logged at `debug` level.
//!
//! # Quick Start
//!
//! ```no_run
//! use todo_tabs::{create_store, AppEnvironment, AppState};
//! use todo_tabs::categories::CategoryAction;
//! use todo_tabs::todos::{DraftField, TodoAction};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = create_store(AppState::new(), AppEnvironment::system());
//!
//! store.send(CategoryAction::InputChanged { value: "Work".into() }.into()).await?;
//! store.send(CategoryAction::CommitCategory.into()).await?;
//!
//! store.send(TodoAction::DraftFieldChanged { field: DraftField::Text, value: "Buy milk".into() }.into()).await?;
//! store.send(TodoAction::CategorySelected { category: "Work".into() }.into()).await?;
//! store.send(TodoAction::CommitTodo.into()).await?;
//!
//! let count = store.state(|s| s.todos.count()).await;
//! println!("Todos: {count}");
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod categories;
pub mod config;
pub mod environment;
pub mod render;
pub mod shell;
pub mod tabs;
pub mod todos;

// Re-export commonly used types
pub use app::{create_store, AppAction, AppReducer, AppState, AppStore};
pub use config::{Config, ConfigError};
pub use environment::AppEnvironment;
pub use shell::{Outcome, Shell, ShellCommand, ShellError};
pub use tabs::{Tab, TabAction};
