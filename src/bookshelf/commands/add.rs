use crate::catalog::Catalog;
use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, Year};
use crate::store::BookStore;
use log::debug;

pub fn run<S: BookStore>(
    catalog: &mut Catalog,
    store: &mut S,
    title: String,
    author: String,
    year: Year,
) -> Result<CmdResult> {
    let book = Book::new(catalog.next_id(), title, author, year);
    catalog.push(book.clone());
    persist(catalog, store)?;
    debug!("Added book {}", book);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added (ID {}): {}",
        book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}
