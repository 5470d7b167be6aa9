//! # REST API Interface Layer
//!
//! HTTP endpoints for the phonebook. Handlers translate requests into
//! `PersonService` calls and domain errors into status codes; they hold no
//! business logic of their own.
//!
//! - **person_apis**: `/api/persons` CRUD
//! - **info_apis**: `/info` summary page
//! - **error**: `PersonError` to HTTP response mapping

pub mod error;
pub mod info_apis;
pub mod person_apis;
