use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::{Library, SearchQuery};
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(library: &Library<B>, query: &SearchQuery) -> Result<CmdResult> {
    let found = library.search_books(query);
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info("No books found."));
    } else {
        result.add_message(CmdMessage::info(format!("Found {} book(s).", found.len())));
    }
    Ok(result.with_listed_books(found))
}
