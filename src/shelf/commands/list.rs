use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(library: &Library<B>) -> Result<CmdResult> {
    let books = library.books();
    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::info("No books."));
    }
    Ok(result.with_listed_books(books))
}
