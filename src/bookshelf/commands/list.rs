use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if catalog.is_empty() {
        result.add_message(CmdMessage::info("The library is empty."));
    }
    Ok(result.with_listed_books(catalog.books().to_vec()))
}
