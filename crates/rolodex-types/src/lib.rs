//! Shared type definitions for the Rolodex people API.
//!
//! This crate is the single source of truth for the wire types used
//! across the workspace. Types defined here flow downstream to
//! `TypeScript` via `ts-rs` for client code.
//!
//! # Modules
//!
//! - [`ids`] -- The [`PersonId`] newtype
//! - [`person`] -- The stored record plus create, patch and stats bodies

pub mod ids;
pub mod person;

// Re-export all public types at crate root for convenience.
pub use ids::PersonId;
pub use person::{PeopleStats, Person, PersonInput, PersonPatch};
