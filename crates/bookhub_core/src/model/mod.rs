//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical book record shared by store, search and UI layers.
//! - Own creation defaults and the built-in seed catalog.
//!
//! # Invariants
//! - Every record is identified by a stable integer `BookId`.
//! - Records are never deleted; the collection only appends and mutates.

pub mod book;
