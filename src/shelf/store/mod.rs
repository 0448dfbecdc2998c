//! # Storage Layer
//!
//! The [`StorageBackend`] trait is the seam between the [`Library`](crate::library::Library)
//! and wherever its records live. The library always hands the backend the complete,
//! ordered list of books; backends never see partial updates.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: Production storage in a single JSON file
//!   - Created (with parent directories) on first open, initialized to `[]`
//!   - Every save replaces the whole file via a temp file and rename
//!
//! - [`memory::MemBackend`]: In-memory storage for testing
//!   - Keeps the serialized JSON text, so tests go through the same encoding
//!   - Can be told to fail saves, to exercise rollback paths
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "id": 0, "title": "Dune", "author": "Frank Herbert", "year": 1965, "status": 0 }
//! ]
//! ```
//!
//! `status` is `0` for in stock and `1` for issued.

use crate::error::{Result, ShelfError};
use crate::model::Book;

pub mod fs;
pub mod memory;

/// Abstract interface for whole-collection persistence.
pub trait StorageBackend {
    /// Read every stored book, in stored order.
    fn load(&self) -> Result<Vec<Book>>;

    /// Replace the stored collection with `books`.
    /// MUST NOT leave a partially written collection behind on failure.
    fn save(&self, books: &[Book]) -> Result<()>;

    /// Where the data lives, for messages and logs.
    fn location(&self) -> String;
}

/// Parse serialized records, mapping parse failures (invalid UTF-8 included) to
/// [`ShelfError::CorruptStore`].
pub(crate) fn decode_books(content: &[u8], location: &str) -> Result<Vec<Book>> {
    serde_json::from_slice(content).map_err(|e| ShelfError::CorruptStore {
        path: location.to_string(),
        reason: e.to_string(),
    })
}

pub(crate) fn encode_books(books: &[Book]) -> Result<String> {
    serde_json::to_string_pretty(books).map_err(ShelfError::Serialization)
}
