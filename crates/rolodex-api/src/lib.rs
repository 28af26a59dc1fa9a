//! HTTP API server for the Rolodex people collection.
//!
//! This crate provides an Axum HTTP server that exposes CRUD, search and
//! summary endpoints over a single in-memory collection of person
//! records:
//!
//! - **Collection endpoints** (`/people`) for listing, searching,
//!   creating and clearing
//! - **Record endpoints** (`/people/{id}`) for reading, replacing,
//!   patching and deleting one person
//! - **Summary endpoint** (`/people/stats`) for count and average age
//! - **Greeting** (`/hello`)
//!
//! # Architecture
//!
//! The collection lives in a [`PersonStore`] owned by [`AppState`] and
//! guarded by one [`tokio::sync::RwLock`]. Each handler holds the lock
//! for the whole of its operation, so concurrent requests are serialized
//! on writes and never observe a half-applied update. Nothing is
//! persisted.
//!
//! [`PersonStore`]: rolodex_store::PersonStore

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::{AppState, DEFAULT_GREETING};
