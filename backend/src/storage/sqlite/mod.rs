//! # SQLite Storage
//!
//! Persistent person storage on top of an sqlx SQLite pool.
//!
//! - **connection.rs** - pool creation and schema setup
//! - **person_repository.rs** - `PersonStorage` implementation

pub mod connection;
pub mod person_repository;

pub use connection::DbConnection;
pub use person_repository::SqlitePersonStore;
