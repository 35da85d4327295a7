//! # Checklist Testing
//!
//! Testing utilities and helpers for the checklist reducer architecture.
//!
//! This crate provides:
//! - Deterministic fakes for environment traits
//! - A Given-When-Then builder for reducers
//! - Property-based testing strategies
//! - Tracing setup for tests
//!
//! ## Example
//!
//! ```ignore
//! use checklist_testing::{test_ids, ReducerTest};
//! use std::sync::Arc;
//!
//! ReducerTest::new(ListReducer::new())
//!     .with_env(ListEnvironment::new(Arc::new(test_ids())))
//!     .given_state(ListState::new())
//!     .when_action(ListAction::SetComposeText { text: "milk".into() })
//!     .then_state(|state| assert_eq!(state.compose_text, "milk"))
//!     .run();
//! ```


/// Mock implementations of Environment traits
pub mod mocks {
    use checklist_core::environment::IdGenerator;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Mutex, PoisonError};

    /// Deterministic id generator that records every id it hands out
    ///
    /// Lets tests assert not only which ids items received but also how
    /// many times the allocator was consulted.
    ///
    /// # Example
    ///
    /// ```
    /// use checklist_testing::mocks::FixedIds;
    /// use checklist_core::environment::IdGenerator;
    ///
    /// let ids = FixedIds::new(10);
    /// assert_eq!(ids.next_id(), 10);
    /// assert_eq!(ids.next_id(), 11);
    /// assert_eq!(ids.issued(), vec![10, 11]);
    /// ```
    #[derive(Debug)]
    pub struct FixedIds {
        next: AtomicU64,
        issued: Mutex<Vec<u64>>,
    }

    impl FixedIds {
        /// Create a generator whose first id is `first`
        #[must_use]
        pub const fn new(first: u64) -> Self {
            Self {
                next: AtomicU64::new(first),
                issued: Mutex::new(Vec::new()),
            }
        }

        /// All ids issued so far, in issue order
        #[must_use]
        pub fn issued(&self) -> Vec<u64> {
            self.issued
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Number of ids issued so far
        #[must_use]
        pub fn calls(&self) -> usize {
            self.issued
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }
    }

    impl IdGenerator for FixedIds {
        fn next_id(&self) -> u64 {
            let mut issued = self.issued.lock().unwrap_or_else(PoisonError::into_inner);
            let id = self.next.fetch_add(1, Ordering::AcqRel);
            issued.push(id);
            id
        }
    }

    /// Create the default fake generator for tests (first id 0)
    #[must_use]
    pub const fn test_ids() -> FixedIds {
        FixedIds::new(0)
    }
}

/// Property-based testing utilities using proptest
pub mod properties {
    use proptest::prelude::*;

    /// Item names that survive trimming (at least one visible character)
    pub fn item_name() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9][a-zA-Z0-9 ]{0,15}"
    }

    /// Compose text that trims to nothing
    pub fn blank_text() -> impl Strategy<Value = String> {
        "[ \t\n]{0,6}"
    }

    /// Any compose text: mostly names, sometimes blank
    pub fn compose_text() -> impl Strategy<Value = String> {
        prop_oneof![4 => item_name(), 1 => blank_text()]
    }
}

/// Install a tracing subscriber for test output
///
/// Honors `RUST_LOG`; safe to call from every test since repeated
/// initialization is ignored.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mocks::{FixedIds, test_ids};
pub use reducer_test::{ReducerTest, assertions};
