use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &Catalog, query: &str) -> Result<CmdResult> {
    let matches: Vec<_> = catalog.search(query).into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No books found."));
    }
    Ok(result.with_listed_books(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::BookStore;

    fn catalog() -> Catalog {
        let store = StoreFixture::new()
            .with_book("Foundation", "Isaac Asimov", 1951)
            .with_book("I, Robot", "Isaac Asimov", 1950)
            .with_book("Dune", "Frank Herbert", 1965)
            .build();
        Catalog::new(store.load().unwrap().into_books())
    }

    #[test]
    fn returns_matches_in_catalog_order() {
        let result = run(&catalog(), "ASIMOV").unwrap();
        let titles: Vec<_> = result.listed_books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Foundation", "I, Robot"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn reports_when_nothing_matches() {
        let result = run(&catalog(), "Tolkien").unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "No books found.");
    }
}
