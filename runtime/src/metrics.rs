//! Metric names and descriptions for the Store.
//!
//! The Store only records through the `metrics` facade; installing a
//! recorder or exporter is left to the embedding application. Without a
//! recorder every call is a no-op.

use metrics::{describe_counter, describe_histogram};

/// Total number of actions sent to a store
pub const ACTIONS_TOTAL: &str = "store_actions_total";

/// Actions that left state untouched (stale ids, no-op toggles)
pub const ACTIONS_UNCHANGED: &str = "store_actions_unchanged_total";

/// Actions refused by validation
pub const ACTIONS_REJECTED: &str = "store_actions_rejected_total";

/// Actions refused because the store is shutting down
pub const ACTIONS_AFTER_SHUTDOWN: &str = "store_actions_after_shutdown_total";

/// Time spent inside the reducer
pub const REDUCER_DURATION: &str = "store_reducer_duration_seconds";

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Total number of actions sent to the store");
    describe_counter!(
        ACTIONS_UNCHANGED,
        "Actions that did not change state"
    );
    describe_counter!(ACTIONS_REJECTED, "Actions refused by validation");
    describe_counter!(
        ACTIONS_AFTER_SHUTDOWN,
        "Actions refused because the store is shutting down"
    );
    describe_histogram!(REDUCER_DURATION, "Time taken to execute the reducer");
}
