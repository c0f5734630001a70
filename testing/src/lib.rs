//! # todo-tabs Testing
//!
//! Testing utilities and helpers for the todo-tabs reducer architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - The [`ReducerTest`] Given-When-Then harness
//! - Assertion helpers for reducer effects
//!
//! ## Example
//!
//! ```ignore
//! use todo_tabs_testing::{test_clock, ReducerTest};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::new(Arc::new(test_clock())))
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::CommitTodo)
//!     .then_state(|state| assert!(state.todos.is_empty()))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use todo_tabs_core::environment::Clock;


/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};
    use std::sync::atomic::{AtomicI64, Ordering};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use todo_tabs_testing::mocks::FixedClock;
    /// use todo_tabs_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Clock that advances by a fixed number of seconds on every reading
    ///
    /// The first call to `now()` returns the start time. Useful to tell apart
    /// timestamps written by consecutive actions.
    #[derive(Debug)]
    pub struct SteppingClock {
        start: DateTime<Utc>,
        step_seconds: i64,
        ticks: AtomicI64,
    }

    impl SteppingClock {
        /// Create a clock starting at `start` and moving `step_seconds` per reading
        #[must_use]
        pub const fn new(start: DateTime<Utc>, step_seconds: i64) -> Self {
            Self {
                start,
                step_seconds,
                ticks: AtomicI64::new(0),
            }
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
            self.start + chrono::Duration::seconds(tick * self.step_seconds)
        }
    }

    /// The instant every test clock starts at (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_epoch() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .expect("hardcoded timestamp should always parse")
            .with_timezone(&Utc)
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(test_epoch())
    }
}

// Re-export commonly used items
pub use mocks::{test_clock, test_epoch, FixedClock, SteppingClock};
pub use reducer_test::{assertions, ReducerTest};
