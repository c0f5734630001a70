//! Metric names and descriptions for the Store runtime.
//!
//! The runtime only records through the `metrics` facade. Without an
//! installed recorder every call is a no-op, so a binary that wants the
//! numbers installs an exporter of its choice and calls [`register_metrics`]
//! once to attach descriptions.

use metrics::{describe_counter, describe_histogram, Unit};

// Re-export metrics macros for use in other modules
pub use metrics::{counter, histogram};

/// Actions accepted by a store
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Actions rejected because the store was shutting down
pub const REJECTED_ACTIONS_TOTAL: &str = "store.shutdown.rejected_actions";

/// Effects executed, labelled by `type`
pub const EFFECTS_EXECUTED_TOTAL: &str = "store.effects.executed";

/// Actions fed back into the store by effects
pub const FEEDBACK_ACTIONS_TOTAL: &str = "store.effects.feedback_actions";

/// Wall time spent inside the reducer
pub const REDUCER_DURATION_SECONDS: &str = "store.reducer.duration_seconds";

/// Register descriptions for every runtime metric.
pub fn register_metrics() {
    describe_counter!(ACTIONS_TOTAL, Unit::Count, "Actions processed by the store");
    describe_counter!(
        REJECTED_ACTIONS_TOTAL,
        Unit::Count,
        "Actions rejected after shutdown was initiated"
    );
    describe_counter!(
        EFFECTS_EXECUTED_TOTAL,
        Unit::Count,
        "Effect descriptions executed, labelled by effect type"
    );
    describe_counter!(
        FEEDBACK_ACTIONS_TOTAL,
        Unit::Count,
        "Actions produced by effects and sent back to the store"
    );
    describe_histogram!(
        REDUCER_DURATION_SECONDS,
        Unit::Seconds,
        "Time spent executing the reducer for one action"
    );
}
