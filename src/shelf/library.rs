//! # Library
//!
//! [`Library`] is the record store: an ordered collection of [`Book`]s bound to one
//! [`StorageBackend`] for its whole lifetime.
//!
//! ## Invariants
//!
//! - Ids are unique. New ids are `max + 1` (or `0` for an empty store); gaps left by
//!   deletion are never filled.
//! - Write-through: when a mutating call returns `Ok`, the backend holds exactly the
//!   in-memory sequence. When persisting fails, the in-memory change is undone and
//!   the error is returned.
//! - Readers get owned copies. Nothing returned from a `Library` can alter its state.

use crate::error::{Result, ShelfError};
use crate::model::{Book, Status};
use crate::store::fs::FileBackend;
use crate::store::StorageBackend;
use crate::validation::validate_new_book;
use log::{debug, warn};
use std::collections::HashSet;
use std::path::Path;

/// Filters for [`Library::search_books`]. Absent filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Case-sensitive substring match on title and author, exact match on year.
    pub fn matches(&self, book: &Book) -> bool {
        let title_ok = self
            .title
            .as_deref()
            .is_none_or(|t| book.title().contains(t));
        let author_ok = self
            .author
            .as_deref()
            .is_none_or(|a| book.author().contains(a));
        let year_ok = self.year.is_none_or(|y| book.year() == y);
        title_ok && author_ok && year_ok
    }
}

pub struct Library<B: StorageBackend> {
    backend: B,
    books: Vec<Book>,
}

impl Library<FileBackend> {
    /// Open (or create) the JSON store at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(FileBackend::open(path.as_ref())?)
    }

    pub fn path(&self) -> &Path {
        self.backend.path()
    }
}

impl<B: StorageBackend> Library<B> {
    /// Load every book from `backend`.
    pub fn new(backend: B) -> Result<Self> {
        let books = backend.load()?;

        let mut seen = HashSet::with_capacity(books.len());
        if let Some(dup) = books.iter().find(|b| !seen.insert(b.id())) {
            return Err(ShelfError::CorruptStore {
                path: backend.location(),
                reason: format!("duplicate book ID {}", dup.id()),
            });
        }

        debug!("Library at {} holds {} book(s)", backend.location(), books.len());
        Ok(Self { backend, books })
    }

    pub fn books(&self) -> Vec<Book> {
        self.books.clone()
    }

    pub fn get_book(&self, id: u64) -> Result<Book> {
        let idx = self.position(id)?;
        Ok(self.books[idx].clone())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn location(&self) -> String {
        self.backend.location()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Validate and append a new in-stock book, returning a copy of it.
    pub fn add_book(&mut self, title: &str, author: &str, year: i32) -> Result<Book> {
        if let Err(e) = validate_new_book(title, author, year) {
            warn!("Rejected new book {:?} by {:?} ({}): {}", title, author, year, e);
            return Err(e);
        }

        let book = Book::new(self.next_id()?, title, author, year);
        self.books.push(book.clone());
        if let Err(e) = self.save() {
            self.books.pop();
            return Err(e);
        }
        Ok(book)
    }

    /// Remove the book with `id`, returning it.
    pub fn delete_book(&mut self, id: u64) -> Result<Book> {
        let idx = self.position(id)?;
        let removed = self.books.remove(idx);
        if let Err(e) = self.save() {
            self.books.insert(idx, removed);
            return Err(e);
        }
        Ok(removed)
    }

    /// Change the status of the book with `id`, returning the updated copy.
    pub fn set_status(&mut self, id: u64, status: Status) -> Result<Book> {
        let idx = self.position(id)?;
        let previous = self.books[idx].status();
        self.books[idx].set_status(status);
        if let Err(e) = self.save() {
            self.books[idx].set_status(previous);
            return Err(e);
        }
        Ok(self.books[idx].clone())
    }

    pub fn search_books(&self, query: &SearchQuery) -> Vec<Book> {
        self.books
            .iter()
            .filter(|book| query.matches(book))
            .cloned()
            .collect()
    }

    /// `max + 1`, or `0` when empty. Fails once the highest id is `u64::MAX`.
    pub(crate) fn next_id(&self) -> Result<u64> {
        match self.books.iter().map(Book::id).max() {
            None => Ok(0),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| ShelfError::InvalidInput("ID space exhausted".to_string())),
        }
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.books.iter().position(|b| b.id() == id).ok_or_else(|| {
            warn!("No book with ID {} in {}", id, self.backend.location());
            ShelfError::NotFound(id)
        })
    }

    fn save(&self) -> Result<()> {
        self.backend.save(&self.books)
    }
}
