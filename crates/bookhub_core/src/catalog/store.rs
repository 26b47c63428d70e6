//! Catalog store: the owning state manager for book records.
//!
//! # Responsibility
//! - Own the insertion-ordered record sequence and the id counter.
//! - Apply mutations and mirror every change to the blob store.
//!
//! # Invariants
//! - `id` values are unique and strictly increasing within one store.
//! - Absent or malformed snapshots load as the default seed, never as an
//!   error; store I/O failures still propagate.
//! - There is no delete operation; the sequence only grows.

use crate::catalog::snapshot::{decode_snapshot, encode_snapshot, CATALOG_BLOB_KEY};
use crate::model::book::{default_seed, Book, BookDraft, BookId};
use crate::search::scan::filter_books;
use crate::store::kv::BlobStore;
use crate::store::StoreError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-layer error for mutation and persistence operations.
#[derive(Debug)]
pub enum CatalogError {
    /// A toggle referenced an id not present in the catalog.
    BookNotFound(BookId),
    Store(StoreError),
    Encode(serde_json::Error),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BookNotFound(id) => write!(f, "book not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "snapshot encoding failed: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::BookNotFound(_) => None,
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StoreError> for CatalogError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Aggregate availability counters for the whole catalog.
///
/// `borrowed` is derived, so `total == available + borrowed` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub available: usize,
    pub borrowed: usize,
}

/// Owning state manager over the persisted record sequence.
pub struct CatalogStore<S: BlobStore> {
    store: S,
    books: Vec<Book>,
    next_id: BookId,
}

impl<S: BlobStore> CatalogStore<S> {
    /// Loads the catalog from the blob store.
    ///
    /// An absent or malformed snapshot yields the default seed. The id
    /// counter resumes above the highest persisted id, so snapshots written
    /// by earlier releases (timestamp-derived ids) stay collision-free.
    pub fn open(store: S) -> CatalogResult<Self> {
        let (books, source) = match store.read_blob(CATALOG_BLOB_KEY)? {
            Some(raw) => match decode_snapshot(&raw) {
                Some(books) => (books, "snapshot"),
                None => (default_seed(), "defaults"),
            },
            None => (default_seed(), "defaults"),
        };

        let next_id = books.iter().map(|book| book.id).max().unwrap_or(0) + 1;
        info!(
            "event=catalog_load module=catalog status=ok source={source} count={}",
            books.len()
        );

        Ok(Self {
            store,
            books,
            next_id,
        })
    }

    /// Read access to the full record sequence in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Appends a record built from the draft and persists the snapshot.
    ///
    /// # Contract
    /// - The new record gets the next counter id and `available = true`.
    /// - Returns the record as stored, defaults substituted.
    pub fn add(&mut self, draft: BookDraft) -> CatalogResult<Book> {
        let book = Book::from_draft(self.next_id, draft);
        self.next_id += 1;
        self.books.push(book.clone());
        self.persist()?;

        info!(
            "event=book_add module=catalog status=ok id={} total={}",
            book.id,
            self.books.len()
        );
        Ok(book)
    }

    /// Flips availability for `id` and persists the snapshot.
    ///
    /// Returns [`CatalogError::BookNotFound`] when the id is absent; callers
    /// treat that as a silent no-op.
    pub fn toggle_availability(&mut self, id: BookId) -> CatalogResult<Book> {
        let Some(book) = self.books.iter_mut().find(|book| book.id == id) else {
            warn!("event=book_toggle module=catalog status=missing id={id}");
            return Err(CatalogError::BookNotFound(id));
        };

        book.toggle_availability();
        let updated = book.clone();
        self.persist()?;

        info!(
            "event=book_toggle module=catalog status=ok id={id} available={}",
            updated.available
        );
        Ok(updated)
    }

    /// Case-insensitive substring search over title, author and genre.
    ///
    /// A blank query returns every record; order is preserved.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        filter_books(&self.books, query)
    }

    /// Aggregate counters over the current sequence.
    pub fn stats(&self) -> CatalogStats {
        let total = self.books.len();
        let available = self.books.iter().filter(|book| book.available).count();
        CatalogStats {
            total,
            available,
            borrowed: total - available,
        }
    }

    fn persist(&self) -> CatalogResult<()> {
        let payload = encode_snapshot(&self.books)?;
        self.store.write_blob(CATALOG_BLOB_KEY, &payload)?;
        Ok(())
    }
}
