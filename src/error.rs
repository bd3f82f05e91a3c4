//! Error types for Navdrawer.
//!
//! Shell operations themselves cannot fail; these errors only arise at the
//! boundaries (CLI parsing and terminal I/O).

use thiserror::Error;

/// Result type alias for Navdrawer operations.
pub type Result<T> = std::result::Result<T, ShellError>;

/// Errors that can occur in Navdrawer.
#[derive(Debug, Error)]
pub enum ShellError {
    /// A route key that names none of the known destinations.
    #[error("Unknown route: {key} (expected one of: home, profile, profile2, settings)")]
    UnknownRoute {
        /// The rejected key.
        key: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl ShellError {
    /// Create an UnknownRoute error.
    pub fn unknown_route(key: impl Into<String>) -> Self {
        Self::UnknownRoute { key: key.into() }
    }
}
