//! # todo-tabs Runtime
//!
//! Runtime implementation for the todo-tabs reducer architecture.
//!
//! This crate provides the [`Store`] that owns application state, runs the
//! reducer for every action and executes the effect descriptions the reducer
//! returns.
//!
//! ## Core Components
//!
//! - **Store**: Owns state behind a lock and serialises actions through the reducer
//! - **Effect Executor**: Executes effect descriptions and feeds actions back to the reducer
//!
//! Every call to [`Store::send`] settles completely before it returns: the
//! reducer has run, every effect has finished, and every action produced by
//! those effects has been processed in turn.
//!
//! ## Example
//!
//! ```ignore
//! use todo_tabs_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use futures::future::BoxFuture;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use todo_tabs_core::{effect::Effect, reducer::Reducer};
use tokio::sync::RwLock;

/// Metric names recorded by the Store
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after shutdown initiated.
        #[error("Store is shutting down")]
        ShutdownInProgress,
    }
}

pub use error::StoreError;

/// The Store and its effect executor
pub mod store {
    use super::{Arc, AtomicBool, BoxFuture, Effect, Ordering, Reducer, RwLock, StoreError};
    use crate::metrics::{
        ACTIONS_TOTAL, EFFECTS_EXECUTED_TOTAL, FEEDBACK_ACTIONS_TOTAL, REDUCER_DURATION_SECONDS,
        REJECTED_ACTIONS_TOTAL,
    };
    use std::marker::PhantomData;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock` so clones of the store share it)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        shutdown: Arc<AtomicBool>,
        _action: PhantomData<fn(A)>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (business logic)
        /// - `environment`: Injected dependencies
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                shutdown: Arc::new(AtomicBool::new(false)),
                _action: PhantomData,
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer under the state write lock, then executes the
        /// returned effects. Actions produced by effects are sent back through
        /// this method before it returns.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shutting down");
                metrics::counter!(REJECTED_ACTIONS_TOTAL).increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            tracing::debug!("Processing action");
            metrics::counter!(ACTIONS_TOTAL).increment(1);

            let effects = {
                let mut state = self.state.write().await;
                tracing::trace!("Acquired write lock on state");

                let span = tracing::debug_span!("reducer_execution");
                let _enter = span.enter();

                let start = std::time::Instant::now();
                let effects = self.reducer.reduce(&mut *state, action, self.environment.as_ref());
                metrics::histogram!(REDUCER_DURATION_SECONDS).record(start.elapsed().as_secs_f64());

                tracing::trace!("Reducer completed, returned {} effects", effects.len());
                effects
            };

            for effect in effects {
                self.execute_effect(effect).await?;
            }
            tracing::debug!("Action processing completed");

            Ok(())
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let todo_count = store.state(|s| s.todos.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Stop accepting actions
        ///
        /// Every later [`send`](Self::send), including feedback from effects
        /// still in flight, fails with [`StoreError::ShutdownInProgress`].
        pub fn shutdown(&self) {
            tracing::info!("Store shutting down");
            self.shutdown.store(true, Ordering::Release);
        }

        /// Returns true once [`shutdown`](Self::shutdown) has been called
        #[must_use]
        pub fn is_shutting_down(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
        }

        fn execute_effect(&self, effect: Effect<A>) -> BoxFuture<'_, Result<(), StoreError>> {
            Box::pin(async move {
                match effect {
                    Effect::None => {
                        tracing::trace!("Executing Effect::None (no-op)");
                        metrics::counter!(EFFECTS_EXECUTED_TOTAL, "type" => "none").increment(1);
                    },
                    Effect::Future(fut) => {
                        tracing::trace!("Executing Effect::Future");
                        metrics::counter!(EFFECTS_EXECUTED_TOTAL, "type" => "future").increment(1);

                        if let Some(action) = fut.await {
                            tracing::trace!("Effect::Future produced an action, sending to store");
                            metrics::counter!(FEEDBACK_ACTIONS_TOTAL).increment(1);
                            self.send(action).await?;
                        } else {
                            tracing::trace!("Effect::Future completed with no action");
                        }
                    },
                    Effect::Parallel(effects) => {
                        tracing::trace!("Executing Effect::Parallel with {} effects", effects.len());
                        metrics::counter!(EFFECTS_EXECUTED_TOTAL, "type" => "parallel").increment(1);

                        let results = futures::future::join_all(
                            effects.into_iter().map(|effect| self.execute_effect(effect)),
                        )
                        .await;
                        for result in results {
                            result?;
                        }
                    },
                    Effect::Sequential(effects) => {
                        let effect_count = effects.len();
                        tracing::trace!("Executing Effect::Sequential with {} effects", effect_count);
                        metrics::counter!(EFFECTS_EXECUTED_TOTAL, "type" => "sequential").increment(1);

                        for (idx, effect) in effects.into_iter().enumerate() {
                            tracing::trace!(
                                "Executing sequential effect {} of {}",
                                idx + 1,
                                effect_count
                            );
                            self.execute_effect(effect).await?;
                        }
                    },
                }
                Ok(())
            })
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                shutdown: Arc::clone(&self.shutdown),
                _action: PhantomData,
            }
        }
    }
}

// Re-export for convenience
pub use store::Store;
