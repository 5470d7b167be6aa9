//! # Storage Module
//!
//! Persistence for person records behind the `PersonStorage` trait.
//!
//! ## Backends
//!
//! - **memory**: `Vec` behind a lock, seeded with the starter phonebook.
//!   Used when no `DATABASE_URL` / `--database-url` is set.
//! - **sqlite**: sqlx SQLite pool at the configured database URL; records
//!   survive restarts.
//!
//! Both backends own ID generation and ID format checks. A malformed ID is
//! reported as `StoreError::InvalidIdentifier`, distinct from "not found".

pub mod memory;
pub mod sqlite;
pub mod traits;

pub use memory::MemoryPersonStore;
pub use sqlite::{DbConnection, SqlitePersonStore};
pub use traits::{PersonStorage, StoreError, StoreResult};
