use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(
    library: &mut Library<B>,
    title: &str,
    author: &str,
    year: i32,
) -> Result<CmdResult> {
    let book = library.add_book(title, author, year)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added (ID {}): {}",
        book.id(),
        book.title()
    )));
    Ok(result.with_affected_books(vec![book]))
}
