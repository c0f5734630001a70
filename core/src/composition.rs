//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Focus a child reducer on a slice of a parent state and
//!   on the parent action variants that carry child actions
//!
//! # Examples
//!
//! ```
//! use todo_tabs_core::composition::{combine_reducers, scope_reducer, BoxedReducer};
//! use todo_tabs_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! #[derive(Clone, Default)]
//! struct Labels {
//!     items: Vec<String>,
//! }
//!
//! #[derive(Clone)]
//! enum LabelAction {
//!     Add(String),
//! }
//!
//! struct LabelReducer;
//!
//! impl Reducer for LabelReducer {
//!     type State = Labels;
//!     type Action = LabelAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut Labels, action: LabelAction, _env: &()) -> SmallVec<[Effect<LabelAction>; 4]> {
//!         let LabelAction::Add(label) = action;
//!         state.items.push(label);
//!         SmallVec::new()
//!     }
//! }
//!
//! #[derive(Clone, Default)]
//! struct Screen {
//!     labels: Labels,
//! }
//!
//! #[derive(Clone)]
//! enum ScreenAction {
//!     Labels(LabelAction),
//!     Refresh,
//! }
//!
//! let scoped = scope_reducer(
//!     LabelReducer,
//!     |screen: &mut Screen| &mut screen.labels,
//!     |action: ScreenAction| match action {
//!         ScreenAction::Labels(inner) => Some(inner),
//!         ScreenAction::Refresh => None,
//!     },
//!     ScreenAction::Labels,
//! );
//! let reducers: Vec<BoxedReducer<Screen, ScreenAction, ()>> = vec![Box::new(scoped)];
//! let combined = combine_reducers(reducers);
//!
//! let mut screen = Screen::default();
//! let _ = combined.reduce(&mut screen, ScreenAction::Labels(LabelAction::Add("x".into())), &());
//! let _ = combined.reduce(&mut screen, ScreenAction::Refresh, &());
//! assert_eq!(screen.labels.items, vec!["x".to_string()]);
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// A boxed reducer that can be shared with the runtime
pub type BoxedReducer<S, A, E> = Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, and all effects are collected and concatenated.
/// This is useful when you want to split reducer logic across multiple implementations.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
/// - `E`: The environment type
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    /// Number of reducers in this combination
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Returns true if no reducers were combined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

/// Scopes a child reducer to a slice of a parent state and action.
///
/// - `state_lens` borrows the child state out of the parent state.
/// - `extract_action` returns the child action carried by a parent action, or
///   `None` when the parent action is not meant for this child (the child is
///   then skipped).
/// - `embed_action` lifts actions produced by the child's effects back into
///   the parent action type.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The child state type (a field of `S`)
/// - `A`: The parent action type
/// - `SubA`: The child action type
/// - `E`: The environment type, shared by parent and child
pub fn scope_reducer<S, SubS, A, SubA, E, R>(
    reducer: R,
    state_lens: fn(&mut S) -> &mut SubS,
    extract_action: fn(A) -> Option<SubA>,
    embed_action: fn(SubA) -> A,
) -> ScopedReducer<S, SubS, A, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    ScopedReducer {
        reducer,
        state_lens,
        extract_action,
        embed_action,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state and actions.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    reducer: R,
    state_lens: fn(&mut S) -> &mut SubS,
    extract_action: fn(A) -> Option<SubA>,
    embed_action: fn(SubA) -> A,
    _phantom: std::marker::PhantomData<fn() -> E>,
}

impl<S, SubS, A, SubA, E, R> Reducer for ScopedReducer<S, SubS, A, SubA, E, R>
where
    SubA: 'static,
    A: 'static,
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(child_action) = (self.extract_action)(action) else {
            return SmallVec::new();
        };

        let child_state = (self.state_lens)(state);
        self.reducer
            .reduce(child_state, child_action, env)
            .into_iter()
            .map(|effect| effect.map(self.embed_action))
            .collect()
    }
}
