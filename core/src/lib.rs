//! # Checklist Core
//!
//! Core traits and types for the checklist reducer architecture.
//!
//! This crate provides the abstractions every list feature is built on:
//! a pure [`Reducer`](reducer::Reducer) that maps `(State, Action)` to the
//! next state, the [`Transition`](reducer::Transition) it reports, and the
//! dependency traits injected through the reducer's environment.
//!
//! ## Core Concepts
//!
//! - **State**: Owned, cloneable domain state
//! - **Action**: A closed enum of discrete user intents
//! - **Reducer**: Pure function `(State, Action, Environment) → State`
//! - **Transition**: What a reduction did (changed, no-op, rejected)
//! - **Environment**: Injected dependencies (id generation)
//!
//! ## Example
//!
//! ```
//! use checklist_core::environment::{IdGenerator, SequentialIds};
//! use checklist_core::reducer::{Reducer, Transition};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Tags {
//!     ids: Vec<u64>,
//! }
//!
//! enum TagAction {
//!     Tag,
//!     Clear,
//! }
//!
//! struct TagReducer;
//!
//! impl Reducer for TagReducer {
//!     type State = Tags;
//!     type Action = TagAction;
//!     type Environment = SequentialIds;
//!
//!     fn reduce(&self, state: &mut Tags, action: TagAction, env: &SequentialIds) -> Transition {
//!         match action {
//!             TagAction::Tag => {
//!                 state.ids.push(env.next_id());
//!                 Transition::Changed
//!             },
//!             TagAction::Clear if state.ids.is_empty() => Transition::Unchanged,
//!             TagAction::Clear => {
//!                 state.ids.clear();
//!                 Transition::Changed
//!             },
//!         }
//!     }
//! }
//!
//! let env = SequentialIds::new();
//! let before = Tags::default();
//! let after = TagReducer.apply(&before, TagAction::Tag, &env);
//! assert!(before.ids.is_empty());
//! assert_eq!(after.ids, vec![0]);
//! ```

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → State`.
/// They hold all the business logic and are deterministic given the same
/// environment.
pub mod reducer {
    use serde::{Deserialize, Serialize};

    /// Outcome of a single reduction
    ///
    /// Reducers never fail. Refusals and stale references are ordinary
    /// outcomes, reported here so the runtime can log them and decide
    /// whether observers need a fresh snapshot.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum Transition {
        /// The state was modified
        Changed,
        /// The action had nothing to act on (e.g. an unknown id)
        Unchanged,
        /// The action was refused by validation; the refusal is recorded in state
        Rejected,
    }

    impl Transition {
        /// Returns `true` if observers should re-render after this transition
        ///
        /// Rejections count: they flip a validation flag the view displays.
        #[must_use]
        pub const fn is_visible(self) -> bool {
            matches!(self, Self::Changed | Self::Rejected)
        }
    }

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into the given state
        ///
        /// Updates `state` in place and reports what happened. Must not
        /// panic for any action value.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Transition;

        /// Compute the next state without touching the current one
        ///
        /// The returned value shares no mutable aliasing with `state`.
        fn apply(
            &self,
            state: &Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Self::State
        where
            Self::State: Clone,
        {
            let mut next = state.clone();
            self.reduce(&mut next, action, env);
            next
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All reducer dependencies are abstracted behind traits and injected via
/// the Environment parameter, so tests can swap in deterministic fakes.
pub mod environment {
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Issues unique, strictly increasing identifiers
    ///
    /// Every call returns a value strictly greater than all values
    /// previously returned by the same generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use checklist_core::environment::{IdGenerator, SequentialIds};
    ///
    /// let ids = SequentialIds::new();
    /// assert_eq!(ids.next_id(), 0);
    /// assert_eq!(ids.next_id(), 1);
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Allocate the next identifier
        fn next_id(&self) -> u64;
    }

    /// Production id generator: a counter starting at 0
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        next: AtomicU64,
    }

    impl SequentialIds {
        /// Creates a generator whose first id is 0
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(0)
        }

        /// Creates a generator whose first id is `first`
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self {
                next: AtomicU64::new(first),
            }
        }

        /// Returns the id the next call to [`IdGenerator::next_id`] will issue
        #[must_use]
        pub fn peek(&self) -> u64 {
            self.next.load(Ordering::Acquire)
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> u64 {
            self.next.fetch_add(1, Ordering::AcqRel)
        }
    }
}
