//! # Domain Module
//!
//! Business rules for the phonebook.
//!
//! - **validation**: required-field and name-uniqueness checks
//! - **person_service**: validation plus store calls for each operation
//! - **errors**: the error taxonomy handlers translate into HTTP responses
//!
//! ## Business Rules
//!
//! - Name and number are required and must be non-empty
//! - Name must be unique among stored persons when creating
//! - Update replaces name and number but does not re-check uniqueness

pub mod errors;
pub mod person_service;
pub mod validation;

pub use errors::{PersonError, PersonResult, PersonValidationError};
pub use person_service::PersonService;
