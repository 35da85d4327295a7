//! Domain types for the checklist.
//!
//! A checklist is an ordered collection of items plus the text the user is
//! composing for the next item. Items can be added, checked off, renamed
//! and deleted; checked items always sort below unchecked ones.

use serde::{Deserialize, Serialize};

/// Unique identifier for an item
///
/// Issued by the environment's id generator; never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates an `ItemId` from a raw value
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single entry in the list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Committed display text
    pub name: String,
    /// Editor buffer, shown instead of `name` while editing
    pub draft_name: String,
    /// Whether the item has been checked off
    pub is_checked: bool,
    /// Whether the editor is open for this item
    pub is_editing: bool,
}

impl Item {
    /// Creates an unchecked, closed item whose draft mirrors its name
    #[must_use]
    pub fn new(id: ItemId, name: String) -> Self {
        Self {
            id,
            draft_name: name.clone(),
            name,
            is_checked: false,
            is_editing: false,
        }
    }

    /// Text the view should display for this item
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.is_editing {
            &self.draft_name
        } else {
            &self.name
        }
    }
}

/// State of the list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    /// Text of the not-yet-submitted item
    pub compose_text: String,
    /// Items in display order
    pub items: Vec<Item>,
    /// Set when an add was attempted with blank compose text
    pub validation_failed: bool,
}

impl ListState {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            compose_text: String::new(),
            items: Vec::new(),
            validation_failed: false,
        }
    }

    /// Returns the number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an item by ID
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Checks if an item exists
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.position(id).is_some()
    }

    /// Returns the display index of an item
    #[must_use]
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Returns the number of checked items
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_checked).count()
    }

    /// Returns the number of unchecked items
    #[must_use]
    pub fn unchecked_count(&self) -> usize {
        self.len() - self.checked_count()
    }

    /// Returns the number of items with an open editor
    #[must_use]
    pub fn editing_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_editing).count()
    }

    /// Returns `true` if no checked item precedes an unchecked one
    #[must_use]
    pub fn is_partitioned(&self) -> bool {
        self.items
            .windows(2)
            .all(|pair| !(pair[0].is_checked && !pair[1].is_checked))
    }

    pub(crate) fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

/// Actions a user can take on the list
///
/// Each variant is one discrete gesture translated by the view: typing in
/// the compose field, pressing Add, clicking an item's checkbox, etc.
/// Actions naming an id that is no longer in the list are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListAction {
    /// Replace the compose text (raw, untrimmed)
    SetComposeText {
        /// New compose text
        text: String,
    },

    /// Submit the compose text as a new item
    Add,

    /// Remove an item
    Delete {
        /// Item to remove
        id: ItemId,
    },

    /// Check or uncheck an item, then re-sort
    ToggleChecked {
        /// Item to toggle
        id: ItemId,
    },

    /// Open or close the item's editor
    ToggleEdit {
        /// Item to toggle
        id: ItemId,
    },

    /// Keystroke in the item's editor
    EditInput {
        /// Item being edited
        id: ItemId,
        /// Full editor text
        text: String,
    },

    /// Enter pressed in the item's editor
    CommitEdit {
        /// Item being edited
        id: ItemId,
    },

    /// Escape pressed in the item's editor
    CancelEdit {
        /// Item being edited
        id: ItemId,
    },
}

impl ListAction {
    /// Returns the item this action targets, if any
    #[must_use]
    pub const fn target(&self) -> Option<ItemId> {
        match self {
            Self::SetComposeText { .. } | Self::Add => None,
            Self::Delete { id }
            | Self::ToggleChecked { id }
            | Self::ToggleEdit { id }
            | Self::EditInput { id, .. }
            | Self::CommitEdit { id }
            | Self::CancelEdit { id } => Some(*id),
        }
    }
}
