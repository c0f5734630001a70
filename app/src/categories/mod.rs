//! Category management: the list of labels todos are filed under.

pub mod reducer;
pub mod types;

pub use reducer::{CategoryReducer, Ignored};
pub use types::{CategoryAction, CategoryState};
