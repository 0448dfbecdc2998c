use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(library: &mut Library<B>, id: u64) -> Result<CmdResult> {
    let book = library.delete_book(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book deleted (ID {}): {}",
        book.id(),
        book.title()
    )));
    Ok(result.with_affected_books(vec![book]))
}
