//! # Storage Traits
//!
//! Storage abstraction for person records. The domain layer only sees
//! `PersonStorage`, so the in-memory and SQLite backends can be swapped
//! without touching the handlers.

use async_trait::async_trait;
use shared::Person;
use thiserror::Error;

/// Failures raised by a storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// The identifier does not have the format the store expects
    #[error("malformatted id: {0}")]
    InvalidIdentifier(String),

    /// Any other backend failure (connection, query, decoding)
    #[error("store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Interface for person storage operations
#[async_trait]
pub trait PersonStorage: Send + Sync {
    /// List every stored person in insertion order
    async fn list_all(&self) -> StoreResult<Vec<Person>>;

    /// Retrieve a person by ID
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Person>>;

    /// Store a new person under a freshly generated ID
    async fn create(&self, name: &str, number: &str) -> StoreResult<Person>;

    /// Replace name and number of an existing person.
    /// Returns `None` when no person has the given ID.
    async fn update_by_id(&self, id: &str, name: &str, number: &str) -> StoreResult<Option<Person>>;

    /// Delete a person. Deleting an unknown ID is not an error.
    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;

    /// Number of stored persons
    async fn count(&self) -> StoreResult<usize>;
}

/// Normalize an incoming identifier to the form IDs are stored in.
/// Anything that is not a UUID is rejected as `InvalidIdentifier`.
pub(crate) fn canonical_id(id: &str) -> StoreResult<String> {
    uuid::Uuid::parse_str(id)
        .map(|uuid| uuid.hyphenated().to_string())
        .map_err(|_| StoreError::InvalidIdentifier(id.to_string()))
}

/// Generate a new identifier in its canonical string form
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().hyphenated().to_string()
}
