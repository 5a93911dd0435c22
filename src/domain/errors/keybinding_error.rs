//! Errors raised while reading key descriptions from configuration.

use thiserror::Error;

/// Key description parsing failures.
#[derive(Debug, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum KeybindingError {
    #[error("empty key description")]
    Empty,

    #[error("unknown key '{key}' in '{description}'")]
    UnknownKey { key: String, description: String },

    #[error("unknown modifier '{modifier}' in '{description}'")]
    UnknownModifier {
        modifier: String,
        description: String,
    },
}

impl KeybindingError {
    /// Creates unknown key error.
    #[must_use]
    pub fn unknown_key(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self::UnknownKey {
            key: key.into(),
            description: description.into(),
        }
    }

    /// Creates unknown modifier error.
    #[must_use]
    pub fn unknown_modifier(modifier: impl Into<String>, description: impl Into<String>) -> Self {
        Self::UnknownModifier {
            modifier: modifier.into(),
            description: description.into(),
        }
    }
}
