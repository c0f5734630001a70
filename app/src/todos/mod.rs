//! The todo list: records, the editor draft and the reducer that drives them.

pub mod reducer;
pub mod types;

pub use reducer::{Ignored, TodoReducer};
pub use types::{DraftField, EditMode, Todo, TodoAction, TodoDraft, TodoId, TodoState};
