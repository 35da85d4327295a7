//! # Checklist Runtime
//!
//! Runtime implementation for the checklist reducer architecture.
//!
//! The reducer itself is pure and single-threaded. The [`Store`] is the
//! imperative shell around it: it owns the state, serializes actions so that
//! id allocation and the state transition happen as one atomic step, and
//! publishes snapshots to whoever renders them.
//!
//! ## Example
//!
//! ```ignore
//! use checklist_runtime::Store;
//!
//! let store = Store::new(ListState::new(), ListReducer::new(), env);
//!
//! // Send an action
//! store.send(ListAction::SetComposeText { text: "milk".into() }).await?;
//! store.send(ListAction::Add).await?;
//!
//! // Read state
//! let count = store.state(|s| s.len()).await;
//! ```

use checklist_core::reducer::{Reducer, Transition};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Metric names recorded by the Store
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Reducers never fail; the only refusal comes from the shell itself.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// Returned when `send()` is called after `shutdown()`.
        #[error("Store is shutting down")]
        ShutdownInProgress,
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use checklist_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_broadcast_capacity(64);
/// assert_eq!(config.broadcast_capacity, 64);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Capacity of the applied-action broadcast channel
    ///
    /// Slow subscribers that fall further behind than this observe a lag
    /// error and skip ahead.
    pub broadcast_capacity: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(broadcast_capacity: usize) -> Self {
        Self { broadcast_capacity }
    }

    /// Set the action broadcast capacity
    ///
    /// Zero is bumped to one, the smallest capacity tokio accepts.
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            broadcast_capacity: 16,
        }
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{AtomicBool, Ordering, Reducer, RwLock, StoreConfig, StoreError, Transition};
    use tokio::sync::{broadcast, watch};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, written by one action at a time)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies, e.g. the id generator)
    /// 4. Snapshot publishing (watch channel of the latest visible state)
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
        state: RwLock<S>,
        reducer: R,
        environment: E,
        shutdown: AtomicBool,
        /// Latest state after every visible transition.
        snapshots: watch::Sender<S>,
        /// Actions that produced a visible transition, in application order.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync,
        A: Send + Clone,
        S: Send + Sync + Clone,
        E: Send + Sync,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with a custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            super::metrics::register_metrics();

            let (snapshots, _) = watch::channel(initial_state.clone());
            let (action_broadcast, _) = broadcast::channel(config.broadcast_capacity.max(1));

            Self {
                state: RwLock::new(initial_state),
                reducer,
                environment,
                shutdown: AtomicBool::new(false),
                snapshots,
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Publishes a snapshot and the action if the transition is visible
        ///
        /// Concurrent `send()` calls serialize on the write lock, so the id
        /// allocation inside the reducer and the resulting state change are
        /// observed as one step by every other caller.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<Transition, StoreError> {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shutting down");
                metrics::counter!(super::metrics::ACTIONS_AFTER_SHUTDOWN).increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            metrics::counter!(super::metrics::ACTIONS_TOTAL).increment(1);

            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            let start = std::time::Instant::now();
            let transition = self
                .reducer
                .reduce(&mut state, action.clone(), &self.environment);
            metrics::histogram!(super::metrics::REDUCER_DURATION)
                .record(start.elapsed().as_secs_f64());

            match transition {
                Transition::Changed => tracing::debug!("Action changed state"),
                Transition::Unchanged => {
                    tracing::trace!("Action was a no-op");
                    metrics::counter!(super::metrics::ACTIONS_UNCHANGED).increment(1);
                },
                Transition::Rejected => {
                    tracing::debug!("Action rejected by validation");
                    metrics::counter!(super::metrics::ACTIONS_REJECTED).increment(1);
                },
            }

            if transition.is_visible() {
                self.snapshots.send_replace(state.clone());
                // No subscribers is fine
                let _ = self.action_broadcast.send(action);
            }

            Ok(transition)
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let checked = store.state(|s| s.checked_count()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Clone the current state
        pub async fn snapshot(&self) -> S {
            self.state(S::clone).await
        }

        /// Subscribe to state snapshots
        ///
        /// The receiver starts at the current snapshot and is notified after
        /// every visible transition. Intermediate snapshots may be skipped
        /// by a slow reader; the latest one is always available.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<S> {
            self.snapshots.subscribe()
        }

        /// Subscribe to applied actions
        ///
        /// Only actions whose transition was visible are broadcast.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Stop accepting actions
        ///
        /// Actions already holding the lock complete; every later `send()`
        /// returns [`StoreError::ShutdownInProgress`].
        pub fn shutdown(&self) {
            tracing::info!("Store shutting down");
            self.shutdown.store(true, Ordering::Release);
        }

        /// Returns `true` once `shutdown()` has been called
        #[must_use]
        pub fn is_shutting_down(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
        }
    }
}

pub use store::Store;
