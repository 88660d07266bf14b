use crate::catalog::Catalog;
use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::Status;
use crate::store::BookStore;
use log::debug;

/// Set a book's status. The id is checked before the status value, so an
/// unknown id is reported even when the status is also bad.
pub fn run<S: BookStore>(
    catalog: &mut Catalog,
    store: &mut S,
    id: u64,
    status: &str,
) -> Result<CmdResult> {
    let book = catalog
        .find_by_id_mut(id)
        .ok_or(ShelfError::BookNotFound(id))?;
    let status: Status = status.parse()?;
    book.status = status;
    let book = book.clone();

    persist(catalog, store)?;
    debug!("Updated status of book {} to {}", book.id, status);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Status updated (ID {}): {} is now {}",
        book.id, book.title, book.status
    )));
    Ok(result.with_affected_books(vec![book]))
}
