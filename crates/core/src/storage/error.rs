use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Absence of an item is not an error; see [`ItemRepository`](super::ItemRepository).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
