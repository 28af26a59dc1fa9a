//! In-memory person collection for the Rolodex people API.
//!
//! All record mutation goes through a [`PersonStore`]: an ordered
//! sequence of [`Person`] records plus a monotonically increasing id
//! counter. The store is a plain owned value with no interior locking;
//! callers that share it across tasks wrap it in a lock of their choice.
//!
//! # Modules
//!
//! - [`store`] -- The [`PersonStore`] struct: create, list, find,
//!   update, patch, delete, clear.
//! - [`query`] -- Read-only linear scans: name search and age stats.
//!
//! # Invariants
//!
//! - Every stored record has a unique id.
//! - The next id to hand out is greater than every id ever assigned,
//!   including ids of records that have since been deleted.
//! - Insertion order is the only ordering; deletes keep the relative
//!   order of the survivors.
//!
//! # Usage
//!
//! ```
//! use rolodex_store::PersonStore;
//! use rolodex_types::{PersonId, PersonInput};
//!
//! let mut store = PersonStore::new();
//! let ada = store
//!     .create(PersonInput { name: "Ada".to_owned(), age: 36, phone: "555".to_owned() })
//!     .ok();
//! assert_eq!(ada.map(|p| p.id), Some(PersonId(1)));
//! assert_eq!(store.search("ad").len(), 1);
//! assert_eq!(store.stats().average_age, 36);
//! ```
//!
//! [`Person`]: rolodex_types::Person

pub mod query;
pub mod store;

pub use store::PersonStore;

use rolodex_types::PersonId;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors returned by [`PersonStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record with the given id exists.
    #[error("person not found: {0}")]
    PersonNotFound(PersonId),

    /// The id counter reached `u64::MAX` and cannot advance.
    #[error("person id space exhausted")]
    IdSpaceExhausted,
}
