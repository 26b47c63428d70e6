//! Book record model.
//!
//! # Responsibility
//! - Define the canonical record persisted in the catalog snapshot.
//! - Provide creation defaults and the availability toggle helper.
//!
//! # Invariants
//! - `id` is unique across the collection for its lifetime.
//! - Newly added records start with `available = true`.
//! - Blank genre/isbn inputs are replaced by their defaults, never rejected.

use serde::{Deserialize, Serialize};

/// Stable integer identifier for a catalog record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookId = i64;

/// Genre substituted when the add form leaves the field blank.
pub const DEFAULT_GENRE: &str = "General";

/// ISBN substituted when the add form leaves the field blank.
pub const DEFAULT_ISBN: &str = "N/A";

/// Canonical catalog record.
///
/// Field names match the persisted snapshot shape verbatim, so snapshots
/// written by earlier releases keep loading unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable catalog ID used for toggle targeting.
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub isbn: String,
    /// `true` while the book sits on the shelf, `false` once borrowed.
    pub available: bool,
}

/// Caller-supplied fields for the add operation.
///
/// Optional fields fall back to [`DEFAULT_GENRE`] / [`DEFAULT_ISBN`]; blank
/// strings are treated the same as absent values. Title and author are
/// accepted as-is, including empty input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub isbn: Option<String>,
}

impl BookDraft {
    /// Creates a draft with only the two always-present fields.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: None,
            isbn: None,
        }
    }
}

impl Book {
    /// Materializes a draft into a record with a caller-assigned ID.
    ///
    /// # Invariants
    /// - `available` starts as `true`.
    /// - Blank genre/isbn inputs are replaced by their defaults.
    pub fn from_draft(id: BookId, draft: BookDraft) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            genre: or_default(draft.genre, DEFAULT_GENRE),
            isbn: or_default(draft.isbn, DEFAULT_ISBN),
            available: true,
        }
    }

    /// Flips availability in place and returns the new state.
    pub fn toggle_availability(&mut self) -> bool {
        self.available = !self.available;
        self.available
    }
}

fn or_default(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => fallback.to_string(),
    }
}

/// Returns the built-in seed catalog used when no snapshot exists.
///
/// The seed is fixed: four classics, with "1984" starting as borrowed.
pub fn default_seed() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            genre: "Classic".to_string(),
            isbn: "9780743273565".to_string(),
            available: true,
        },
        Book {
            id: 2,
            title: "To Kill a Mockingbird".to_string(),
            author: "Harper Lee".to_string(),
            genre: "Fiction".to_string(),
            isbn: "9780061120084".to_string(),
            available: true,
        },
        Book {
            id: 3,
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            genre: "Dystopian".to_string(),
            isbn: "9780451524935".to_string(),
            available: false,
        },
        Book {
            id: 4,
            title: "Pride and Prejudice".to_string(),
            author: "Jane Austen".to_string(),
            genre: "Romance".to_string(),
            isbn: "9780141439518".to_string(),
            available: true,
        },
    ]
}
