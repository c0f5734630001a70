//! Dependencies injected into every reducer of the application.

use std::sync::Arc;
use todo_tabs_core::environment::{Clock, SystemClock};

/// Environment shared by the todo, category and tab reducers
#[derive(Clone)]
pub struct AppEnvironment {
    /// Clock for due dates
    pub clock: Arc<dyn Clock>,
}

impl AppEnvironment {
    /// Creates an environment around the given clock
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Environment backed by the system clock
    #[must_use]
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl std::fmt::Debug for AppEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppEnvironment").finish_non_exhaustive()
    }
}
