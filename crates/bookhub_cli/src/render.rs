//! Text renderer for catalog surfaces.
//!
//! # Responsibility
//! - Render record sequences into named output surfaces.
//! - Show the toggle affordance only where the surface allows it.
//!
//! # Invariants
//! - Rendering is read-only and deterministic for a given input.

use bookhub_core::{Book, CatalogStats};
use std::io::{self, Write};

/// Logical output region for one listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Full catalog listing with per-record toggle controls.
    AllBooks,
    /// Search results; read-only listing.
    SearchResults,
}

impl Surface {
    fn heading(self) -> &'static str {
        match self {
            Self::AllBooks => "All Books",
            Self::SearchResults => "Search Results",
        }
    }

    fn shows_toggle_control(self) -> bool {
        matches!(self, Self::AllBooks)
    }
}

/// Renders a record listing into the target surface.
pub fn render_books(out: &mut dyn Write, books: &[Book], surface: Surface) -> io::Result<()> {
    writeln!(out, "== {} ==", surface.heading())?;
    if books.is_empty() {
        writeln!(out, "No books found")?;
        return Ok(());
    }

    for book in books {
        let status = if book.available {
            "Available"
        } else {
            "Borrowed"
        };
        writeln!(out, "#{} {}", book.id, book.title)?;
        writeln!(out, "    by {}", book.author)?;
        writeln!(out, "    {} | ISBN {}", book.genre, book.isbn)?;
        writeln!(out, "    status: {status}")?;
        if surface.shows_toggle_control() {
            let action = if book.available {
                "mark as borrowed"
            } else {
                "mark as available"
            };
            writeln!(out, "    toggle {} to {action}", book.id)?;
        }
    }

    Ok(())
}

/// Renders the aggregate counters line.
pub fn render_stats(out: &mut dyn Write, stats: CatalogStats) -> io::Result<()> {
    writeln!(
        out,
        "total={} available={} borrowed={}",
        stats.total, stats.available, stats.borrowed
    )
}

#[cfg(test)]
mod tests {
    use super::{render_books, render_stats, Surface};
    use bookhub_core::{default_seed, CatalogStats};

    fn rendered(books: &[bookhub_core::Book], surface: Surface) -> String {
        let mut out = Vec::new();
        render_books(&mut out, books, surface).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn all_books_surface_lists_records_with_toggle_controls() {
        let text = rendered(&default_seed(), Surface::AllBooks);

        assert!(text.contains("== All Books =="));
        assert!(text.contains("#1 The Great Gatsby"));
        assert!(text.contains("by George Orwell"));
        assert!(text.contains("status: Borrowed"));
        assert!(text.contains("toggle 3 to mark as available"));
        assert!(text.contains("toggle 1 to mark as borrowed"));
    }

    #[test]
    fn search_results_surface_has_no_toggle_controls() {
        let text = rendered(&default_seed(), Surface::SearchResults);

        assert!(text.contains("== Search Results =="));
        assert!(text.contains("#3 1984"));
        assert!(!text.contains("toggle "));
    }

    #[test]
    fn empty_listing_renders_the_placeholder() {
        let text = rendered(&[], Surface::SearchResults);
        assert!(text.contains("No books found"));
    }

    #[test]
    fn stats_line_shows_all_three_counters() {
        let mut out = Vec::new();
        render_stats(
            &mut out,
            CatalogStats {
                total: 4,
                available: 3,
                borrowed: 1,
            },
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "total=4 available=3 borrowed=1\n"
        );
    }
}
