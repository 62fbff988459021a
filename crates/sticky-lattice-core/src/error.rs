//! Error types for Sticky Lattice.

use thiserror::Error;

/// The main error type for Sticky Lattice operations.
///
/// Only [`StickyError::MissingCollaborator`] is fatal. [`StickyError::NotFound`]
/// shows up naturally while the data set changes under a scroll, and every
/// component in the workspace treats it as "no header for this pass".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StickyError {
    /// The item provider had no data for a position (stale adapter position).
    #[error("no item data for position {position}")]
    NotFound {
        /// The position that failed to resolve.
        position: usize,
    },

    /// A required collaborator was not wired before `build()`.
    #[error("required collaborator not set: {0}")]
    MissingCollaborator(&'static str),

    /// Configuration failed to parse or validate.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StickyError {
    /// Returns true for errors that mean "stale data, skip this pass".
    #[inline]
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// A specialized Result type for Sticky Lattice operations.
pub type Result<T> = std::result::Result<T, StickyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = StickyError::NotFound { position: 7 };
        assert_eq!(err.to_string(), "no item data for position 7");

        let err = StickyError::MissingCollaborator("item provider");
        assert_eq!(err.to_string(), "required collaborator not set: item provider");
    }

    #[test]
    fn test_is_stale() {
        assert!(StickyError::NotFound { position: 0 }.is_stale());
        assert!(!StickyError::InvalidConfig("bad".into()).is_stale());
    }
}
