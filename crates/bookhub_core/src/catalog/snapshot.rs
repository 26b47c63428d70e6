//! Snapshot codec for the persisted catalog blob.
//!
//! # Responsibility
//! - Encode the full record sequence as one JSON array value.
//! - Decode persisted payloads, failing open on malformed data.
//!
//! # Invariants
//! - Decoding never errors: any malformed payload yields `None`.
//! - Encoding preserves insertion order and every field verbatim.

use crate::model::book::Book;
use log::warn;

/// Fixed blob-store key under which the whole catalog is persisted.
pub const CATALOG_BLOB_KEY: &str = "bookhub_books";

/// Serializes the full record sequence for persistence.
pub(crate) fn encode_snapshot(books: &[Book]) -> Result<String, serde_json::Error> {
    serde_json::to_string(books)
}

/// Parses a persisted snapshot payload.
///
/// Malformed payloads are logged and treated the same as absent data, so
/// callers fall back to the default seed instead of surfacing a parse error.
pub(crate) fn decode_snapshot(raw: &str) -> Option<Vec<Book>> {
    match serde_json::from_str(raw) {
        Ok(books) => Some(books),
        Err(err) => {
            warn!("event=snapshot_decode module=catalog status=malformed error={err}");
            None
        }
    }
}
