//! Shopping-list reducer built on the checklist architecture.
//!
//! A user types a name, presses Add, then checks items off, renames them
//! and deletes them. This crate holds the state machine behind that
//! screen; the screen itself is somebody else's problem.
//!
//! - Adding rejects blank names by raising `validation_failed`
//! - Checked items sink below unchecked ones, each group keeping its order
//! - Editing is live by default, or buffered until commit (see [`EditMode`])
//! - Actions naming a deleted item are ignored
//!
//! # Quick Start
//!
//! ```
//! use checklist::{ListAction, ListEnvironment, ListReducer, ListState};
//! use checklist_core::{environment::SequentialIds, reducer::Reducer};
//! use std::sync::Arc;
//!
//! let env = ListEnvironment::new(Arc::new(SequentialIds::new()));
//! let reducer = ListReducer::new();
//!
//! let state = ListState::new();
//! let state = reducer.apply(&state, ListAction::SetComposeText { text: "milk".into() }, &env);
//! let state = reducer.apply(&state, ListAction::Add, &env);
//!
//! let milk = state.items[0].id;
//! let state = reducer.apply(&state, ListAction::ToggleChecked { id: milk }, &env);
//!
//! assert_eq!(state.checked_count(), 1);
//! assert_eq!(state.compose_text, "");
//! ```

pub mod config;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use config::{ConfigError, EditMode, InsertPosition, ListConfig};
pub use reducer::{ListEnvironment, ListReducer};
pub use types::{Item, ItemId, ListAction, ListState};

/// Store specialized to the checklist reducer
pub type ListStore = checklist_runtime::Store<ListState, ListAction, ListEnvironment, ListReducer>;
