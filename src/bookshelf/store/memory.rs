use super::{BookStore, Snapshot};
use crate::error::Result;
use crate::model::Book;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Option<Vec<Book>>,
    corrupt: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose contents fail to decode, as a damaged file would.
    pub fn corrupt(reason: &str) -> Self {
        Self {
            corrupt: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn saved_books(&self) -> Option<&[Book]> {
        self.saved.as_deref()
    }

    /// Number of times the collection has been written.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<Snapshot> {
        if let Some(reason) = &self.corrupt {
            return Ok(Snapshot::Corrupt {
                reason: reason.clone(),
            });
        }
        Ok(match &self.saved {
            Some(books) => Snapshot::Loaded(books.clone()),
            None => Snapshot::Fresh,
        })
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.corrupt = None;
        self.saved = Some(books.to_vec());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Status, Year};

    /// Builds an `InMemoryStore` holding a pre-saved catalog.
    #[derive(Default)]
    pub struct StoreFixture {
        books: Vec<Book>,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_book(mut self, title: &str, author: &str, year: i64) -> Self {
            let id = self.books.len() as u64 + 1;
            self.books.push(Book::new(
                id,
                title.to_string(),
                author.to_string(),
                Year::Number(year),
            ));
            self
        }

        pub fn with_checked_out_book(mut self, title: &str, author: &str, year: i64) -> Self {
            self = self.with_book(title, author, year);
            if let Some(book) = self.books.last_mut() {
                book.status = Status::CheckedOut;
            }
            self
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Book {}", i + 1);
                let author = format!("Author {}", i + 1);
                self = self.with_book(&title, &author, 2000 + i as i64);
            }
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore {
                saved: Some(self.books),
                corrupt: None,
                saves: 0,
            }
        }
    }
}
