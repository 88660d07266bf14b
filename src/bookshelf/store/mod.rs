//! # Storage Layer
//!
//! The catalog is persisted as a whole: it is read once when the library is
//! opened and rewritten after every mutation. [`BookStore`] hides where that
//! whole-collection snapshot lives.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production storage, a single pretty-printed JSON
//!   array (`library.json` by default)
//! - [`memory::InMemoryStore`]: no persistence, used by tests
//!
//! ## Loading
//!
//! Absence of prior state is not an error. [`BookStore::load`] returns a
//! [`Snapshot`] that says whether the store was empty, held books, or held
//! something that could not be parsed. Callers start from an empty catalog in
//! the last two cases; only genuine I/O failures come back as `Err`.

use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod memory;

/// What a store held when it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    /// Nothing has been saved yet.
    Fresh,
    Loaded(Vec<Book>),
    /// The stored data could not be decoded; treated as an empty catalog.
    Corrupt { reason: String },
}

impl Snapshot {
    pub fn into_books(self) -> Vec<Book> {
        match self {
            Snapshot::Loaded(books) => books,
            Snapshot::Fresh | Snapshot::Corrupt { .. } => Vec::new(),
        }
    }
}

/// Outcome of the initial load, kept by the API for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Fresh,
    Loaded(usize),
    Corrupt(String),
}

impl From<&Snapshot> for LoadState {
    fn from(snapshot: &Snapshot) -> Self {
        match snapshot {
            Snapshot::Fresh => LoadState::Fresh,
            Snapshot::Loaded(books) => LoadState::Loaded(books.len()),
            Snapshot::Corrupt { reason } => LoadState::Corrupt(reason.clone()),
        }
    }
}

/// Abstract interface for catalog persistence.
pub trait BookStore {
    /// Read the full collection
    fn load(&self) -> Result<Snapshot>;

    /// Overwrite the stored collection with `books`
    fn save(&mut self, books: &[Book]) -> Result<()>;
}
