//! Command registry and line dispatch for the interactive shell.
//!
//! # Responsibility
//! - Map command names to handler functions registered at setup.
//! - Parse input lines into catalog operations and route their output.
//!
//! # Invariants
//! - Dispatch never panics on malformed input; it answers with an
//!   error-styled notification instead.

use crate::notify::{notify, notify_outcome, NotificationKind};
use crate::render::{render_books, render_stats, Surface};
use bookhub_core::{BlobStore, BookDraft, BookId, CatalogService};
use std::io::{self, Write};

/// Dispatch result signalling whether the input loop should continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

type Handler<S> = fn(&mut CatalogService<S>, &str, &mut dyn Write) -> io::Result<Flow>;

/// Explicit command-name to handler mapping, registered once at setup.
pub struct CommandRegistry<S: BlobStore> {
    entries: Vec<(&'static str, Handler<S>)>,
}

impl<S: BlobStore> CommandRegistry<S> {
    /// Registers the built-in command set.
    pub fn new() -> Self {
        Self {
            entries: vec![
                ("list", handle_list::<S> as Handler<S>),
                ("search", handle_search::<S>),
                ("add", handle_add::<S>),
                ("toggle", handle_toggle::<S>),
                ("stats", handle_stats::<S>),
                ("help", handle_help::<S>),
                ("quit", handle_quit::<S>),
            ],
        }
    }

    /// Dispatches one input line to its registered handler.
    ///
    /// Blank lines are ignored; unknown commands produce an error-styled
    /// notification and keep the loop running.
    pub fn dispatch(
        &self,
        service: &mut CatalogService<S>,
        line: &str,
        out: &mut dyn Write,
    ) -> io::Result<Flow> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(Flow::Continue);
        }

        let (name, args) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (trimmed, ""),
        };

        match self.entries.iter().find(|(entry, _)| *entry == name) {
            Some((_, handler)) => handler(service, args, out),
            None => {
                notify(
                    out,
                    NotificationKind::Error,
                    &format!("unknown command: {name}"),
                )?;
                Ok(Flow::Continue)
            }
        }
    }
}

fn handle_list<S: BlobStore>(
    service: &mut CatalogService<S>,
    _args: &str,
    out: &mut dyn Write,
) -> io::Result<Flow> {
    render_books(out, &service.list_books(), Surface::AllBooks)?;
    Ok(Flow::Continue)
}

fn handle_search<S: BlobStore>(
    service: &mut CatalogService<S>,
    args: &str,
    out: &mut dyn Write,
) -> io::Result<Flow> {
    render_books(out, &service.search_books(args), Surface::SearchResults)?;
    Ok(Flow::Continue)
}

fn handle_add<S: BlobStore>(
    service: &mut CatalogService<S>,
    args: &str,
    out: &mut dyn Write,
) -> io::Result<Flow> {
    let Some(draft) = parse_draft(args) else {
        notify(
            out,
            NotificationKind::Error,
            "usage: add <title> | <author> [| genre [| isbn]]",
        )?;
        return Ok(Flow::Continue);
    };

    let outcome = service.add_book(draft);
    notify_outcome(out, &outcome)?;
    if outcome.ok {
        // The original form clears and returns to the full listing view.
        render_books(out, &service.list_books(), Surface::AllBooks)?;
        render_stats(out, service.stats())?;
    }
    Ok(Flow::Continue)
}

fn handle_toggle<S: BlobStore>(
    service: &mut CatalogService<S>,
    args: &str,
    out: &mut dyn Write,
) -> io::Result<Flow> {
    let Ok(id) = args.trim().parse::<BookId>() else {
        notify(out, NotificationKind::Error, "usage: toggle <book-id>")?;
        return Ok(Flow::Continue);
    };

    let outcome = service.toggle_book(id);
    notify_outcome(out, &outcome)?;
    if outcome.ok {
        render_books(out, &service.list_books(), Surface::AllBooks)?;
        render_stats(out, service.stats())?;
    }
    Ok(Flow::Continue)
}

fn handle_stats<S: BlobStore>(
    service: &mut CatalogService<S>,
    _args: &str,
    out: &mut dyn Write,
) -> io::Result<Flow> {
    render_stats(out, service.stats())?;
    Ok(Flow::Continue)
}

fn handle_help<S: BlobStore>(
    _service: &mut CatalogService<S>,
    _args: &str,
    out: &mut dyn Write,
) -> io::Result<Flow> {
    writeln!(out, "commands:")?;
    writeln!(out, "  list                                    show the full catalog")?;
    writeln!(out, "  search <query>                          filter by title, author or genre")?;
    writeln!(out, "  add <title> | <author> [| genre [| isbn]]")?;
    writeln!(out, "  toggle <book-id>                        flip borrowed/available")?;
    writeln!(out, "  stats                                   show catalog counters")?;
    writeln!(out, "  quit")?;
    Ok(Flow::Continue)
}

fn handle_quit<S: BlobStore>(
    _service: &mut CatalogService<S>,
    _args: &str,
    _out: &mut dyn Write,
) -> io::Result<Flow> {
    Ok(Flow::Quit)
}

// Fields are pipe-separated; title and author are accepted as-is (even
// empty), trailing optional fields fall back to catalog defaults.
fn parse_draft(args: &str) -> Option<BookDraft> {
    let mut parts = args.split('|').map(str::trim);
    let title = parts.next()?;
    let author = parts.next()?;
    let genre = parts.next().filter(|part| !part.is_empty());
    let isbn = parts.next().filter(|part| !part.is_empty());

    Some(BookDraft {
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.map(str::to_string),
        isbn: isbn.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_draft, CommandRegistry, Flow};
    use bookhub_core::{
        open_store_in_memory, BlobStore, CatalogService, CatalogStore, SqliteBlobStore,
    };
    use rusqlite::Connection;

    fn service(conn: &Connection) -> CatalogService<SqliteBlobStore<'_>> {
        let store = SqliteBlobStore::try_new(conn).unwrap();
        CatalogService::new(CatalogStore::open(store).unwrap())
    }

    fn dispatch<S: BlobStore>(
        registry: &CommandRegistry<S>,
        service: &mut CatalogService<S>,
        line: &str,
    ) -> (Flow, String) {
        let mut out = Vec::new();
        let flow = registry.dispatch(service, line, &mut out).unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_draft_accepts_two_to_four_fields() {
        let draft = parse_draft("Dune | Frank Herbert").unwrap();
        assert_eq!(draft.title, "Dune");
        assert_eq!(draft.genre, None);

        let full = parse_draft("Dune | Frank Herbert | Science Fiction | 9780441172719").unwrap();
        assert_eq!(full.genre.as_deref(), Some("Science Fiction"));
        assert_eq!(full.isbn.as_deref(), Some("9780441172719"));

        assert!(parse_draft("only a title").is_none());
    }

    #[test]
    fn parse_draft_keeps_empty_title_and_author() {
        let draft = parse_draft(" | ").unwrap();
        assert_eq!(draft.title, "");
        assert_eq!(draft.author, "");
    }

    #[test]
    fn unknown_command_reports_an_error_and_continues() {
        let conn = open_store_in_memory().unwrap();
        let mut service = service(&conn);
        let registry = CommandRegistry::new();

        let (flow, output) = dispatch(&registry, &mut service, "frobnicate now");
        assert_eq!(flow, Flow::Continue);
        assert!(output.contains("[error] unknown command: frobnicate"));
    }

    #[test]
    fn search_renders_into_the_search_results_surface() {
        let conn = open_store_in_memory().unwrap();
        let mut service = service(&conn);
        let registry = CommandRegistry::new();

        let (_, output) = dispatch(&registry, &mut service, "search GATSBY");
        assert!(output.contains("== Search Results =="));
        assert!(output.contains("The Great Gatsby"));
        assert!(!output.contains("toggle "));
    }

    #[test]
    fn add_notifies_and_returns_to_the_full_listing() {
        let conn = open_store_in_memory().unwrap();
        let mut service = service(&conn);
        let registry = CommandRegistry::new();

        let (_, output) = dispatch(&registry, &mut service, "add Dune | Frank Herbert");
        assert!(output.contains("[ok] Book added successfully!"));
        assert!(output.contains("== All Books =="));
        assert!(output.contains("#5 Dune"));
        assert!(output.contains("total=5 available=4 borrowed=1"));
    }

    #[test]
    fn toggle_messages_follow_the_new_state() {
        let conn = open_store_in_memory().unwrap();
        let mut service = service(&conn);
        let registry = CommandRegistry::new();

        let (_, borrowed) = dispatch(&registry, &mut service, "toggle 1");
        assert!(borrowed.contains("[ok] Book borrowed successfully!"));

        let (_, returned) = dispatch(&registry, &mut service, "toggle 1");
        assert!(returned.contains("[ok] Book returned successfully!"));
    }

    #[test]
    fn toggle_of_unknown_id_stays_silent() {
        let conn = open_store_in_memory().unwrap();
        let mut service = service(&conn);
        let registry = CommandRegistry::new();

        let (flow, output) = dispatch(&registry, &mut service, "toggle 999");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(output, "");
    }

    #[test]
    fn quit_stops_the_loop() {
        let conn = open_store_in_memory().unwrap();
        let mut service = service(&conn);
        let registry = CommandRegistry::new();

        let (flow, _) = dispatch(&registry, &mut service, "quit");
        assert_eq!(flow, Flow::Quit);
    }
}
