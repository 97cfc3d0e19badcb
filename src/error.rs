//! Error types for todor
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in the todo store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// No item with the given id exists (never created, or already removed)
    #[error("Item not found: {0}")]
    NotFound(String),
}

impl TodoError {
    /// Stable machine-readable kind, used by hosts that map errors onto their own surface
    pub fn kind(&self) -> &'static str {
        match self {
            TodoError::NotFound(_) => "not_found",
        }
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = TodoError::NotFound("abc-123".to_string());
        assert_eq!(err.to_string(), "Item not found: abc-123");
    }

    #[test]
    fn test_not_found_kind() {
        let err = TodoError::NotFound(String::new());
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(TodoError::NotFound("missing".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert_eq!(returns_err(), Err(TodoError::NotFound("missing".to_string())));
    }
}
