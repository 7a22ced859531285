//! Errors reported by graph mutations.
//!
//! Queries never fail: a missing town or road is reported as `None`.  Only
//! structural violations in mutations are errors, and they are detected
//! before any state changes.

/// Errors that can occur when mutating a [`crate::TownGraph`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A required town handle is unset (its name is empty).
    #[error("Town handle is unset")]
    NullArgument,
    /// The named town is not in the graph's vertex set.
    #[error("Town not found in graph: {0}")]
    InvalidArgument(String),
}

impl GraphError {
    /// Returns true for the "unset handle" kind, i.e. a programmer error
    /// rather than a data error.
    pub fn is_null_argument(&self) -> bool {
        matches!(self, GraphError::NullArgument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(GraphError::NullArgument.to_string(), "Town handle is unset");
        assert_eq!(
            GraphError::InvalidArgument("Town_12".to_string()).to_string(),
            "Town not found in graph: Town_12"
        );
    }

    #[test]
    fn test_kinds_are_distinct() {
        assert!(GraphError::NullArgument.is_null_argument());
        assert!(!GraphError::InvalidArgument("x".to_string()).is_null_argument());
    }
}
