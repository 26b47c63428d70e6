//! Catalog search.
//!
//! # Responsibility
//! - Match free-text queries against the in-memory record sequence.
//!
//! # Invariants
//! - Search is read-only; it never mutates or reorders the catalog.

pub mod scan;
