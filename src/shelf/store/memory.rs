use super::{decode_books, encode_books, StorageBackend};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::cell::{Cell, RefCell};
use std::io;

const LOCATION: &str = "<memory>";

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug)]
pub struct MemBackend {
    content: RefCell<String>,
    fail_saves: Cell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::from_json("[]")
    }

    /// Start from raw serialized content, as if read from a file.
    pub fn from_json(content: impl Into<String>) -> Self {
        Self {
            content: RefCell::new(content.into()),
            fail_saves: Cell::new(false),
        }
    }

    /// The serialized collection as last saved.
    pub fn contents(&self) -> String {
        self.content.borrow().clone()
    }

    /// Make subsequent saves fail with an I/O error.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Vec<Book>> {
        decode_books(self.content.borrow().as_bytes(), LOCATION)
    }

    fn save(&self, books: &[Book]) -> Result<()> {
        if self.fail_saves.get() {
            return Err(ShelfError::Io(io::Error::other("simulated save failure")));
        }
        *self.content.borrow_mut() = encode_books(books)?;
        Ok(())
    }

    fn location(&self) -> String {
        LOCATION.to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::library::Library;
    use crate::model::Status;

    pub struct LibraryFixture {
        books: Vec<Book>,
    }

    impl Default for LibraryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl LibraryFixture {
        pub fn new() -> Self {
            Self { books: Vec::new() }
        }

        /// Append `count` in-stock books with consecutive ids after the current max.
        pub fn with_books(mut self, count: usize) -> Self {
            for _ in 0..count {
                let id = self.next_id();
                let title = format!("Test Book {}", id);
                let author = format!("Author {}", id);
                self.books.push(Book::new(id, title, author, 2000));
            }
            self
        }

        pub fn with_book(mut self, title: &str, author: &str, year: i32, status: Status) -> Self {
            let id = self.next_id();
            self.books
                .push(Book::with_status(id, title, author, year, status));
            self
        }

        pub fn build(self) -> Library<MemBackend> {
            let backend = MemBackend::new();
            backend.save(&self.books).unwrap();
            Library::new(backend).unwrap()
        }

        fn next_id(&self) -> u64 {
            match self.books.iter().map(Book::id).max() {
                None => 0,
                Some(max) => max.checked_add(1).expect("fixture ran out of book ids"),
            }
        }
    }
}
