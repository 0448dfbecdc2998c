//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for UI clients. It accepts the raw text a user typed, turns it into typed arguments,
//! and dispatches to `commands/*.rs`.
//!
//! ## Input Normalization
//!
//! - Ids parse as non-negative integers, years as integers.
//! - In searches, a blank title, author, or year means "no filter on this field".
//!   A year of `0` also means "any year".
//! - Statuses accept `0`/`1` or their names (`in-stock`, `issued`).
//!
//! Anything that fails to parse is reported as [`ShelfError::InvalidInput`], naming
//! the field, before the library is touched.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `ShelfApi<FileBackend>`
//! - Testing: `ShelfApi<MemBackend>`

use crate::commands;
use crate::error::{Result, ShelfError};
use crate::library::{Library, SearchQuery};
use crate::model::Status;
use crate::store::fs::FileBackend;
use crate::store::StorageBackend;
use std::path::Path;

pub struct ShelfApi<B: StorageBackend> {
    library: Library<B>,
}

impl ShelfApi<FileBackend> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Library::open(path)?))
    }
}

impl<B: StorageBackend> ShelfApi<B> {
    pub fn new(library: Library<B>) -> Self {
        Self { library }
    }

    pub fn add_book(&mut self, title: &str, author: &str, year: &str) -> Result<CmdResult> {
        let year = parse_year(year)?;
        commands::add::run(&mut self.library, title, author, year)
    }

    pub fn delete_book(&mut self, id: &str) -> Result<CmdResult> {
        let id = parse_id(id)?;
        commands::delete::run(&mut self.library, id)
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::run(&self.library)
    }

    pub fn search_books(&self, title: &str, author: &str, year: &str) -> Result<CmdResult> {
        let query = SearchQuery {
            title: non_blank(title),
            author: non_blank(author),
            year: non_blank(year)
                .map(|y| parse_year(&y))
                .transpose()?
                .filter(|&y| y != 0),
        };
        commands::search::run(&self.library, &query)
    }

    pub fn set_status(&mut self, id: &str, status: &str) -> Result<CmdResult> {
        let id = parse_id(id)?;
        let status: Status = status.parse().map_err(ShelfError::InvalidInput)?;
        commands::status::run(&mut self.library, id, status)
    }

    pub fn library(&self) -> &Library<B> {
        &self.library
    }
}

fn non_blank(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn parse_id(s: &str) -> Result<u64> {
    s.trim()
        .parse()
        .map_err(|_| ShelfError::InvalidInput(format!("Invalid ID: {}", s.trim())))
}

fn parse_year(s: &str) -> Result<i32> {
    s.trim()
        .parse()
        .map_err(|_| ShelfError::InvalidInput(format!("Invalid year: {}", s.trim())))
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::LibraryFixture;
    use crate::store::memory::MemBackend;

    fn api() -> ShelfApi<MemBackend> {
        ShelfApi::new(
            LibraryFixture::new()
                .with_book("Book1", "Author1", 2000, Status::InStock)
                .with_book("Book2", "Author2", 2001, Status::Issued)
                .build(),
        )
    }

    #[test]
    fn add_parses_year() {
        let mut api = api();
        let result = api.add_book("Dune", "Frank Herbert", " 1965 ").unwrap();
        assert_eq!(result.affected_books[0].year(), 1965);
        assert_eq!(result.affected_books[0].id(), 2);
    }

    #[test]
    fn add_rejects_unparseable_year() {
        let mut api = api();
        let err = api.add_book("Dune", "Frank Herbert", "sixties").unwrap_err();
        assert_eq!(err.to_string(), "Invalid year: sixties");
        assert_eq!(api.library().len(), 2);
    }

    #[test]
    fn delete_rejects_negative_id() {
        let mut api = api();
        assert!(matches!(
            api.delete_book("-1"),
            Err(ShelfError::InvalidInput(_))
        ));
    }

    #[test]
    fn delete_dispatches_to_library() {
        let mut api = api();
        api.delete_book("1").unwrap();
        assert_eq!(api.library().len(), 1);
    }

    #[test]
    fn blank_search_fields_are_ignored() {
        let api = api();
        assert_eq!(api.search_books("", " ", "").unwrap().listed_books.len(), 2);
        assert_eq!(
            api.search_books("", "", "2001").unwrap().listed_books[0].title(),
            "Book2"
        );
    }

    #[test]
    fn search_year_zero_means_any_year() {
        let api = api();
        assert_eq!(api.search_books("", "", "0").unwrap().listed_books.len(), 2);
        assert_eq!(
            api.search_books("Book1", "", " 0 ").unwrap().listed_books[0].id(),
            0
        );
    }

    #[test]
    fn search_rejects_bad_year() {
        let api = api();
        assert!(matches!(
            api.search_books("", "", "20o1"),
            Err(ShelfError::InvalidInput(_))
        ));
    }

    #[test]
    fn set_status_accepts_codes_and_names() {
        let mut api = api();
        api.set_status("0", "1").unwrap();
        assert_eq!(api.library().get_book(0).unwrap().status(), Status::Issued);
        api.set_status("0", "in-stock").unwrap();
        assert_eq!(api.library().get_book(0).unwrap().status(), Status::InStock);
    }

    #[test]
    fn set_status_rejects_unknown_status() {
        let mut api = api();
        let err = api.set_status("0", "lost").unwrap_err();
        assert_eq!(err.to_string(), "Invalid status: lost");
    }

    #[test]
    fn list_returns_everything() {
        let api = api();
        assert_eq!(api.list_books().unwrap().listed_books.len(), 2);
    }
}
