use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::model::Status;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(
    library: &mut Library<B>,
    id: u64,
    status: Status,
) -> Result<CmdResult> {
    let book = library.set_status(id, status)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Status updated (ID {}): {}",
        book.id(),
        book.status()
    )));
    Ok(result.with_affected_books(vec![book]))
}
