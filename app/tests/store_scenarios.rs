//! Integration tests running the application store end to end
//!
//! Each test drives an `AppStore` through `send` and checks the resulting
//! state, the way the terminal front-end does.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use std::sync::Arc;
use todo_tabs::categories::CategoryAction;
use todo_tabs::todos::{DraftField, EditMode, TodoAction};
use todo_tabs::{create_store, AppAction, AppEnvironment, AppState, AppStore, Tab, TabAction};
use todo_tabs_runtime::StoreError;
use todo_tabs_testing::{test_clock, test_epoch};

// ============================================================================
// Test Fixtures
// ============================================================================

fn store() -> AppStore {
    create_store(AppState::new(), AppEnvironment::new(Arc::new(test_clock())))
}

async fn add_category(store: &AppStore, name: &str) {
    store
        .send(
            CategoryAction::InputChanged {
                value: name.to_string(),
            }
            .into(),
        )
        .await
        .unwrap();
    store.send(CategoryAction::CommitCategory.into()).await.unwrap();
}

async fn add_todo(store: &AppStore, text: &str, category: &str) {
    let actions: [AppAction; 3] = [
        TodoAction::DraftFieldChanged {
            field: DraftField::Text,
            value: text.to_string(),
        }
        .into(),
        TodoAction::CategorySelected {
            category: category.to_string(),
        }
        .into(),
        TodoAction::CommitTodo.into(),
    ];
    for action in actions {
        store.send(action).await.unwrap();
    }
}

async fn texts(store: &AppStore) -> Vec<String> {
    store
        .state(|s| s.todos.todos.iter().map(|t| t.text.clone()).collect())
        .await
}

// ============================================================================
// Category scenarios
// ============================================================================

#[tokio::test]
async fn category_commit_and_blank_commit() {
    let store = store();

    add_category(&store, "Work").await;
    assert_eq!(store.state(|s| s.categories.categories.clone()).await, vec!["Work"]);

    add_category(&store, "").await;
    assert_eq!(store.state(|s| s.categories.categories.clone()).await, vec!["Work"]);
}

#[tokio::test]
async fn category_edit_reinserts_at_end() {
    let store = store();
    add_category(&store, "A").await;
    add_category(&store, "B").await;

    store
        .send(CategoryAction::EditCategory { index: 0 }.into())
        .await
        .unwrap();
    let (categories, input) = store
        .state(|s| (s.categories.categories.clone(), s.categories.input.clone()))
        .await;
    assert_eq!(categories, vec!["B"]);
    assert_eq!(input, "A");

    add_category(&store, "A2").await;
    assert_eq!(
        store.state(|s| s.categories.categories.clone()).await,
        vec!["B", "A2"]
    );
}

#[tokio::test]
async fn deleting_category_orphans_todos() {
    let store = store();
    add_category(&store, "Work").await;
    add_todo(&store, "Report", "Work").await;

    store
        .send(CategoryAction::DeleteCategory { index: 0 }.into())
        .await
        .unwrap();

    let (categories, category) = store
        .state(|s| (s.categories.categories.len(), s.todos.todos[0].category.clone()))
        .await;
    assert_eq!(categories, 0);
    assert_eq!(category, "Work");
}

// ============================================================================
// Todo scenarios
// ============================================================================

#[tokio::test]
async fn add_and_toggle_todo() {
    let store = store();
    add_todo(&store, "Buy milk", "Work").await;

    let todo = store.state(|s| s.todos.todos[0].clone()).await;
    assert_eq!(todo.text, "Buy milk");
    assert_eq!(todo.category, "Work");
    assert!(!todo.completed);
    assert_eq!(todo.due_date, test_epoch());

    store
        .send(TodoAction::ToggleCompleted { index: 0 }.into())
        .await
        .unwrap();
    assert!(store.state(|s| s.todos.todos[0].completed).await);

    store
        .send(TodoAction::ToggleCompleted { index: 0 }.into())
        .await
        .unwrap();
    assert!(!store.state(|s| s.todos.todos[0].completed).await);
}

#[tokio::test]
async fn delete_shifts_entries() {
    let store = store();
    add_todo(&store, "zero", "Work").await;
    add_todo(&store, "one", "Work").await;
    add_todo(&store, "two", "Work").await;

    store
        .send(TodoAction::DeleteTodo { index: 1 }.into())
        .await
        .unwrap();

    assert_eq!(texts(&store).await, vec!["zero", "two"]);
}

#[tokio::test]
async fn edit_and_update_in_place() {
    let store = store();
    add_todo(&store, "first", "Work").await;
    add_todo(&store, "second", "Home").await;
    store
        .send(TodoAction::ToggleCompleted { index: 1 }.into())
        .await
        .unwrap();

    let id = store.state(|s| s.todos.todos[1].id.clone()).await;
    store
        .send(TodoAction::BeginEdit { index: 1 }.into())
        .await
        .unwrap();
    assert_eq!(
        store.state(|s| s.todos.edit_mode.clone()).await,
        EditMode::Editing {
            index: 1,
            id: id.clone()
        }
    );

    store
        .send(
            TodoAction::DraftFieldChanged {
                field: DraftField::LongDescription,
                value: "  all the details ".to_string(),
            }
            .into(),
        )
        .await
        .unwrap();
    store.send(TodoAction::CommitTodo.into()).await.unwrap();

    let state = store.state(Clone::clone).await;
    assert_eq!(state.todos.count(), 2);
    let updated = &state.todos.todos[1];
    assert_eq!(updated.id, id);
    assert_eq!(updated.text, "second");
    assert_eq!(updated.long_description, "all the details");
    assert!(!updated.completed);
    assert_eq!(state.todos.edit_mode, EditMode::Idle);
}

#[tokio::test]
async fn tab_switch_leaves_lists_alone() {
    let store = store();
    add_todo(&store, "stay", "Work").await;

    store
        .send(
            TabAction::SelectTab {
                tab: Tab::Categories,
            }
            .into(),
        )
        .await
        .unwrap();

    let state = store.state(Clone::clone).await;
    assert_eq!(state.tab, Tab::Categories);
    assert_eq!(state.todos.count(), 1);
}

// ============================================================================
// Runtime behaviour
// ============================================================================

#[tokio::test]
async fn clones_share_state() {
    let store = store();
    let other = store.clone();

    add_category(&other, "Shared").await;
    assert_eq!(
        store.state(|s| s.categories.categories.clone()).await,
        vec!["Shared"]
    );
}

#[tokio::test]
async fn shutdown_rejects_actions() {
    let store = store();
    store.shutdown();

    let result = store.send(TodoAction::CommitTodo.into()).await;
    assert_eq!(result, Err(StoreError::ShutdownInProgress));
    assert!(store.is_shutting_down());
}
