//! The in-memory catalog: an ordered list of books plus the lookup and
//! matching rules. Nothing here touches storage.

use crate::model::Book;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Id for the next added book: current size plus one.
    ///
    /// After a removal this can repeat an id still held by a surviving book
    /// (add 1, add 2, remove 1, add -> 2 again). Kept so existing files keep
    /// getting the ids they always did.
    pub fn next_id(&self) -> u64 {
        self.books.len() as u64 + 1
    }

    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: u64) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    /// Remove the first book with `id`, returning it.
    pub fn remove(&mut self, id: u64) -> Option<Book> {
        let pos = self.books.iter().position(|b| b.id == id)?;
        Some(self.books.remove(pos))
    }

    /// Books whose title, author or year contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        let query = query.to_lowercase();
        self.books
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&query)
                    || b.author.to_lowercase().contains(&query)
                    || b.year.to_string().to_lowercase().contains(&query)
            })
            .collect()
    }
}
