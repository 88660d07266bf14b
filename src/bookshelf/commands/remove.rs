use crate::catalog::Catalog;
use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::store::BookStore;
use log::debug;

pub fn run<S: BookStore>(catalog: &mut Catalog, store: &mut S, id: u64) -> Result<CmdResult> {
    let book = catalog.remove(id).ok_or(ShelfError::BookNotFound(id))?;
    persist(catalog, store)?;
    debug!("Removed book {}", book);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book removed (ID {}): {}",
        book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}
