//! Error handling for geodraw
//!
//! Interactive drawing and editing never fail with an error: geometry helpers
//! return `Option`, validation returns a structured result, and modes ignore
//! events they cannot act on. The types here cover the remaining cases:
//! - Parsing textual input (coordinates, unit names)
//! - Configuration misuse detected at construction time
//! - I/O at the application edge
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for geodraw
///
/// A unified error type used by the public parsing and configuration APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// A coordinate string could not be parsed
    #[error("Invalid coordinate '{input}': {reason}")]
    InvalidCoordinate {
        /// The text that failed to parse.
        input: String,
        /// The reason parsing failed.
        reason: String,
    },

    /// A distance unit name was not recognised
    #[error("Unknown distance unit: {unit}")]
    UnknownUnit {
        /// The unrecognised unit name.
        unit: String,
    },

    /// Configuration rejected at construction time
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Why the configuration was rejected.
        reason: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create an invalid-coordinate error
    pub fn invalid_coordinate(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidCoordinate {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-configuration error
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Check if this is a parse error for user-supplied text
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidCoordinate { .. } | Error::UnknownUnit { .. }
        )
    }

    /// Check if this is a configuration error
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Error::InvalidConfiguration { .. })
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
