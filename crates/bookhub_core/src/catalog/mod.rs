//! Catalog state management.
//!
//! # Responsibility
//! - Own the in-memory record sequence and mirror it to blob storage.
//! - Provide the add/toggle/search/stats operations UI layers call into.
//!
//! # Invariants
//! - The catalog is the exclusive owner of its record sequence.
//! - Every mutation persists the full snapshot before returning.

pub mod snapshot;
pub mod store;
