//! Error types for scene setup.
//!
//! Frame evaluation itself cannot fail. Everything that can go wrong is
//! caught once, when a [`SceneConfig`](crate::config::SceneConfig) is
//! validated or the greeting strings are looked up.

use core::fmt;

use crate::strings::StringKey;

/// Errors raised while building a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A duration or period that must be positive is zero.
    ZeroDuration { field: &'static str },

    /// A numeric value is not finite or its range is inverted.
    InvalidRange { field: &'static str },

    /// An opacity lies outside `[0, 1]`.
    OpacityOutOfRange { field: &'static str },

    /// The string resources have no entry for a required key.
    MissingString(StringKey),
}

impl fmt::Display for ConfigError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ConfigError::ZeroDuration { field } => write!(f, "{field} must be greater than zero"),
            ConfigError::InvalidRange { field } => write!(f, "{field} has an invalid range"),
            ConfigError::OpacityOutOfRange { field } => write!(f, "{field} must be within 0.0..=1.0"),
            ConfigError::MissingString(key) => write!(f, "missing string resource: {}", key.name()),
        }
    }
}

impl core::error::Error for ConfigError {}
