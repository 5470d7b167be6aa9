//! # Phonebook Backend
//!
//! REST service for a phonebook of names and numbers.
//!
//! ```text
//! IO Layer (axum handlers, error translation)
//!     ↓
//! Domain Layer (validation, PersonService)
//!     ↓
//! Storage Layer (PersonStorage: memory or SQLite)
//! ```
//!
//! The store is chosen at startup and injected into `AppState`; handlers never
//! know which backend they are talking to.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::{http::Method, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

use crate::config::Config;
use crate::domain::PersonService;
use crate::io::rest::{info_apis, person_apis};
use crate::storage::{DbConnection, MemoryPersonStore, PersonStorage, SqlitePersonStore};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub person_service: PersonService,
}

impl AppState {
    pub fn new(store: Arc<dyn PersonStorage>) -> Self {
        Self {
            person_service: PersonService::new(store),
        }
    }
}

/// Open the configured store and build the application state
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    let store: Arc<dyn PersonStorage> = match &config.database_url {
        Some(url) => {
            info!("Setting up database at {}", url);
            let db = DbConnection::new(url).await?;
            Arc::new(SqlitePersonStore::new(db))
        }
        None => {
            info!("No database URL configured, using seeded in-memory store");
            Arc::new(MemoryPersonStore::seeded())
        }
    };

    Ok(AppState::new(store))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let api_routes = person_apis::router().fallback(io::unknown_endpoint);

    Router::new()
        .nest("/api", api_routes)
        .merge(info_apis::router())
        .fallback_service(ServeDir::new(static_dir))
        .layer(trace)
        .layer(cors)
        .with_state(app_state)
}
