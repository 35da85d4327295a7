//! Configuration for the checklist reducer.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable selecting where new items land
pub const INSERT_POSITION_VAR: &str = "CHECKLIST_INSERT_POSITION";

/// Environment variable selecting the edit commit mode
pub const EDIT_MODE_VAR: &str = "CHECKLIST_EDIT_MODE";

/// Errors from configuration loading
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value outside its allowed set
    #[error("invalid value {value:?} for {key} (expected one of: {expected})")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Offending value
        value: String,
        /// Accepted values
        expected: &'static str,
    },
}

/// Where `Add` places a new item
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    /// Newest first
    #[default]
    Prepend,
    /// Newest last among the unchecked items
    Append,
}

impl FromStr for InsertPosition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prepend" => Ok(Self::Prepend),
            "append" => Ok(Self::Append),
            _ => Err(ConfigError::InvalidValue {
                key: INSERT_POSITION_VAR,
                value: s.to_string(),
                expected: "prepend, append",
            }),
        }
    }
}

/// When editor keystrokes reach an item's committed name
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Every keystroke updates both the draft and the name
    #[default]
    Live,
    /// Keystrokes update the draft; the name changes on commit only
    Buffered,
}

impl FromStr for EditMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "buffered" => Ok(Self::Buffered),
            _ => Err(ConfigError::InvalidValue {
                key: EDIT_MODE_VAR,
                value: s.to_string(),
                expected: "live, buffered",
            }),
        }
    }
}

/// Reducer policy knobs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Where new items land
    pub insert_position: InsertPosition,
    /// When edits are committed to the item name
    pub edit_mode: EditMode,
}

impl ListConfig {
    /// Create a configuration with explicit policies
    #[must_use]
    pub const fn new(insert_position: InsertPosition, edit_mode: EditMode) -> Self {
        Self {
            insert_position,
            edit_mode,
        }
    }

    /// Set the insert position
    #[must_use]
    pub const fn with_insert_position(mut self, insert_position: InsertPosition) -> Self {
        self.insert_position = insert_position;
        self
    }

    /// Set the edit mode
    #[must_use]
    pub const fn with_edit_mode(mut self, edit_mode: EditMode) -> Self {
        self.edit_mode = edit_mode;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to the defaults (`prepend`, `live`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set to an
    /// unrecognized value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a value is unrecognized.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let insert_position = lookup(INSERT_POSITION_VAR)
            .map(|value| value.parse::<InsertPosition>())
            .transpose()?
            .unwrap_or_default();
        let edit_mode = lookup(EDIT_MODE_VAR)
            .map(|value| value.parse::<EditMode>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            insert_position,
            edit_mode,
        })
    }
}
