use thiserror::Error;

use crate::storage::StoreError;

/// Reasons a person payload is rejected before touching the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonValidationError {
    #[error("name is required")]
    MissingName,
    #[error("number is required")]
    MissingNumber,
    #[error("name must be unique")]
    DuplicateName,
}

/// Errors returned by `PersonService`
#[derive(Debug, Error)]
pub enum PersonError {
    #[error(transparent)]
    Validation(#[from] PersonValidationError),

    #[error("person not found: {0}")]
    NotFound(String),

    #[error("malformatted id: {0}")]
    InvalidIdentifier(String),

    #[error("store unavailable")]
    StoreUnavailable(#[source] StoreError),
}

impl From<StoreError> for PersonError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidIdentifier(id) => PersonError::InvalidIdentifier(id),
            other => PersonError::StoreUnavailable(other),
        }
    }
}

pub type PersonResult<T> = std::result::Result<T, PersonError>;
