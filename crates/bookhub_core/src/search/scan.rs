//! Linear scan matching over catalog records.
//!
//! # Responsibility
//! - Match free-text queries against title, author and genre.
//! - Preserve catalog insertion order in results.
//!
//! # Invariants
//! - Matching is case-insensitive on both sides.
//! - A blank query matches every record.

use crate::model::book::Book;

/// Filters records by case-insensitive substring match.
///
/// The query is matched against title, author and genre; any hit qualifies
/// the record. Blank queries return the full sequence.
pub fn filter_books<'a>(books: &'a [Book], query: &str) -> Vec<&'a Book> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return books.iter().collect();
    }

    books
        .iter()
        .filter(|book| matches_query(book, &needle))
        .collect()
}

// `needle` must already be lowercased by the caller.
fn matches_query(book: &Book, needle: &str) -> bool {
    book.title.to_lowercase().contains(needle)
        || book.author.to_lowercase().contains(needle)
        || book.genre.to_lowercase().contains(needle)
}
