//! Shared application state for the people API.
//!
//! [`AppState`] owns the one [`PersonStore`] for the process. The store
//! sits behind a single read-write lock: list, get, search and stats
//! take the read side, every mutation takes the write side. Nothing is
//! persisted; a restart starts from an empty collection.

use std::sync::Arc;

use rolodex_store::PersonStore;
use tokio::sync::RwLock;

/// Greeting returned by `GET /hello` unless configured otherwise.
pub const DEFAULT_GREETING: &str = "Hello! Welcome to the Rolodex people API";

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The person collection.
    pub store: Arc<RwLock<PersonStore>>,
    /// Message served by `GET /hello`.
    pub greeting: String,
}

impl AppState {
    /// Create application state with an empty store and the default greeting.
    pub fn new() -> Self {
        Self::with_greeting(DEFAULT_GREETING)
    }

    /// Create application state with an empty store and a custom greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            store: Arc::new(RwLock::new(PersonStore::new())),
            greeting: greeting.into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
