/// Error types for Site Marks
use thiserror::Error;

/// Which of the two form fields failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid site name")]
    Name,
    #[error("invalid site url")]
    Url,
    #[error("invalid site name and url")]
    Both,
}

/// A delete request addressed a position past the end of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no bookmark at index {index} (have {len})")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

/// Failures of the durable key-value backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write storage: {0}")]
    Write(String),
    #[error("failed to serialize bookmarks: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The durable entry exists but is not a bookmark list
    #[error("stored bookmarks are malformed: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_message() {
        let err = IndexError { index: 4, len: 2 };
        assert_eq!(err.to_string(), "no bookmark at index 4 (have 2)");
    }

    #[test]
    fn test_store_error_wraps_validation() {
        let err: StoreError = ValidationError::Both.into();

        assert_eq!(err, StoreError::Validation(ValidationError::Both));
        assert_eq!(err.to_string(), "invalid site name and url");
    }
}
