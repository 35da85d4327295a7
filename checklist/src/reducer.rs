//! Reducer logic for the checklist.
//!
//! Every gesture is applied to completion before the next one. Nothing here
//! fails: a blank submission raises `validation_failed`, and an action
//! naming an item that is gone is ignored.

use crate::config::{EditMode, InsertPosition, ListConfig};
use crate::types::{Item, ItemId, ListAction, ListState};
use checklist_core::{
    environment::IdGenerator,
    reducer::{Reducer, Transition},
};
use std::sync::Arc;

/// Environment dependencies for the list reducer
#[derive(Clone)]
pub struct ListEnvironment {
    /// Source of item ids
    pub ids: Arc<dyn IdGenerator>,
    /// Ordering and editing policies
    pub config: ListConfig,
}

impl ListEnvironment {
    /// Creates a new `ListEnvironment` with the default policies
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self::with_config(ids, ListConfig::default())
    }

    /// Creates a new `ListEnvironment` with explicit policies
    #[must_use]
    pub fn with_config(ids: Arc<dyn IdGenerator>, config: ListConfig) -> Self {
        Self { ids, config }
    }
}

impl std::fmt::Debug for ListEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListEnvironment")
            .field("ids", &"<dyn IdGenerator>")
            .field("config", &self.config)
            .finish()
    }
}

/// Reducer for the checklist
#[derive(Clone, Copy, Debug, Default)]
pub struct ListReducer;

impl ListReducer {
    /// Creates a new `ListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Submits the compose text as a new item
    fn add(state: &mut ListState, env: &ListEnvironment) -> Transition {
        if state.compose_text.trim().is_empty() {
            state.validation_failed = true;
            return Transition::Rejected;
        }

        let id = ItemId::new(env.ids.next_id());
        let item = Item::new(id, std::mem::take(&mut state.compose_text));

        let at = match env.config.insert_position {
            InsertPosition::Prepend => 0,
            // Newest last, but still above every checked item
            InsertPosition::Append => state
                .items
                .iter()
                .position(|item| item.is_checked)
                .unwrap_or(state.items.len()),
        };
        state.items.insert(at, item);
        state.validation_failed = false;

        Transition::Changed
    }

    fn delete(state: &mut ListState, id: ItemId) -> Transition {
        match state.position(id) {
            Some(index) => {
                state.items.remove(index);
                Transition::Changed
            },
            None => Transition::Unchanged,
        }
    }

    /// Flips the checkbox and moves the item into its group
    ///
    /// Refused while the item's editor is open.
    fn toggle_checked(state: &mut ListState, id: ItemId) -> Transition {
        let Some(item) = state.get_mut(id) else {
            return Transition::Unchanged;
        };
        if item.is_editing {
            return Transition::Unchanged;
        }
        item.is_checked = !item.is_checked;

        Self::partition(&mut state.items);
        Transition::Changed
    }

    /// Unchecked items first, checked items last
    ///
    /// `sort_by_key` is stable, so items within each group keep their
    /// current relative order whatever order the list arrived in.
    fn partition(items: &mut [Item]) {
        items.sort_by_key(|item| item.is_checked);
    }

    fn toggle_edit(state: &mut ListState, id: ItemId, mode: EditMode) -> Transition {
        let Some(item) = state.get_mut(id) else {
            return Transition::Unchanged;
        };

        if item.is_editing {
            // Closing through the edit button keeps what was typed
            return Self::commit(item, mode);
        }
        item.is_editing = true;
        Transition::Changed
    }

    fn edit_input(state: &mut ListState, id: ItemId, text: String, mode: EditMode) -> Transition {
        let Some(item) = state.get_mut(id) else {
            return Transition::Unchanged;
        };

        match mode {
            EditMode::Live => {
                item.name.clone_from(&text);
                item.draft_name = text;
            },
            EditMode::Buffered if item.is_editing => item.draft_name = text,
            // No open editor to hold the draft
            EditMode::Buffered => return Transition::Unchanged,
        }
        Transition::Changed
    }

    fn commit_edit(state: &mut ListState, id: ItemId, mode: EditMode) -> Transition {
        match state.get_mut(id) {
            Some(item) if item.is_editing => Self::commit(item, mode),
            _ => Transition::Unchanged,
        }
    }

    fn cancel_edit(state: &mut ListState, id: ItemId) -> Transition {
        match state.get_mut(id) {
            Some(item) if item.is_editing => {
                item.draft_name.clone_from(&item.name);
                item.is_editing = false;
                Transition::Changed
            },
            _ => Transition::Unchanged,
        }
    }

    /// Closes an open editor, leaving `draft_name == name`
    fn commit(item: &mut Item, mode: EditMode) -> Transition {
        if mode == EditMode::Buffered {
            // A blank draft would leave the item without a name
            if item.draft_name.trim().is_empty() {
                return Transition::Rejected;
            }
            item.name.clone_from(&item.draft_name);
        }
        item.is_editing = false;
        Transition::Changed
    }
}

impl Reducer for ListReducer {
    type State = ListState;
    type Action = ListAction;
    type Environment = ListEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Transition {
        let target = action.target();
        let config = env.config;

        let transition = match action {
            ListAction::SetComposeText { text } => {
                if state.compose_text == text {
                    Transition::Unchanged
                } else {
                    state.compose_text = text;
                    Transition::Changed
                }
            },
            ListAction::Add => Self::add(state, env),
            ListAction::Delete { id } => Self::delete(state, id),
            ListAction::ToggleChecked { id } => Self::toggle_checked(state, id),
            ListAction::ToggleEdit { id } => Self::toggle_edit(state, id, config.edit_mode),
            ListAction::EditInput { id, text } => {
                Self::edit_input(state, id, text, config.edit_mode)
            },
            ListAction::CommitEdit { id } => Self::commit_edit(state, id, config.edit_mode),
            ListAction::CancelEdit { id } => Self::cancel_edit(state, id),
        };

        if let (Transition::Unchanged, Some(id)) = (transition, target) {
            tracing::trace!(%id, exists = state.contains(id), "Ignored item action");
        }

        transition
    }
}
