//! Catalog use-case service.
//!
//! # Responsibility
//! - Wrap catalog operations into never-panicking outcome envelopes.
//! - Compose the user-facing feedback messages for add/toggle flows.
//!
//! # Invariants
//! - A missing toggle target yields a silent outcome, not an error message.
//! - Service APIs never bypass catalog persistence contracts.

use crate::catalog::store::{CatalogError, CatalogStats, CatalogStore};
use crate::model::book::{Book, BookDraft, BookId};
use crate::store::kv::BlobStore;
use log::error;

/// Operation result envelope for UI command flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Whether the operation mutated the catalog.
    pub ok: bool,
    /// The affected record on success.
    pub book: Option<Book>,
    /// Feedback message; empty for silent no-ops.
    pub message: String,
}

impl ActionOutcome {
    fn success(message: impl Into<String>, book: Book) -> Self {
        Self {
            ok: true,
            book: Some(book),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            book: None,
            message: message.into(),
        }
    }

    fn silent() -> Self {
        Self {
            ok: false,
            book: None,
            message: String::new(),
        }
    }

    /// Returns whether the UI should suppress feedback for this outcome.
    pub fn is_silent(&self) -> bool {
        self.message.is_empty()
    }
}

/// Use-case service wrapper over the catalog store.
pub struct CatalogService<S: BlobStore> {
    catalog: CatalogStore<S>,
}

impl<S: BlobStore> CatalogService<S> {
    /// Creates a service over an already-loaded catalog.
    pub fn new(catalog: CatalogStore<S>) -> Self {
        Self { catalog }
    }

    /// Adds a record and reports the outcome.
    ///
    /// # Contract
    /// - Never panics; persistence failures become non-ok outcomes.
    pub fn add_book(&mut self, draft: BookDraft) -> ActionOutcome {
        match self.catalog.add(draft) {
            Ok(book) => ActionOutcome::success("Book added successfully!", book),
            Err(err) => {
                error!("event=book_add module=service status=error error={err}");
                ActionOutcome::failure(format!("add failed: {err}"))
            }
        }
    }

    /// Toggles availability and reports the outcome.
    ///
    /// # Contract
    /// - An unknown id is a silent no-op (empty message, `ok = false`).
    /// - The message reflects the record's new state.
    pub fn toggle_book(&mut self, id: BookId) -> ActionOutcome {
        match self.catalog.toggle_availability(id) {
            Ok(book) => {
                let message = if book.available {
                    "Book returned successfully!"
                } else {
                    "Book borrowed successfully!"
                };
                ActionOutcome::success(message, book)
            }
            Err(CatalogError::BookNotFound(_)) => ActionOutcome::silent(),
            Err(err) => {
                error!("event=book_toggle module=service status=error error={err}");
                ActionOutcome::failure(format!("toggle failed: {err}"))
            }
        }
    }

    /// Returns the full record sequence for the all-books surface.
    pub fn list_books(&self) -> Vec<Book> {
        self.catalog.books().to_vec()
    }

    /// Returns matching records for the search-results surface.
    pub fn search_books(&self, query: &str) -> Vec<Book> {
        self.catalog
            .search(query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Returns aggregate counters for the stats surface.
    pub fn stats(&self) -> CatalogStats {
        self.catalog.stats()
    }
}
