//! # API Facade
//!
//! [`LibraryApi`] is the single entry point for catalog operations, whatever
//! UI sits on top. It owns the in-memory [`Catalog`] and the [`BookStore`]
//! that backs it, loads the catalog once when opened, and dispatches each
//! operation to its command module.
//!
//! The API does not print. Successes come back as [`CmdResult`] values with
//! leveled messages; lookup and validation failures come back as
//! [`ShelfError`](crate::error::ShelfError) variants that a caller can match on.
//!
//! ## Generic Over BookStore
//!
//! - Production: `LibraryApi<JsonFileStore>`
//! - Testing: `LibraryApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::model::{Book, Year};
use crate::store::{BookStore, LoadState};
use log::info;

pub struct LibraryApi<S: BookStore> {
    store: S,
    catalog: Catalog,
    load_state: LoadState,
}

impl<S: BookStore> LibraryApi<S> {
    /// Load the catalog from `store`. A missing or unparsable store yields an
    /// empty catalog; see [`LibraryApi::load_state`] for which one happened.
    pub fn open(store: S) -> Result<Self> {
        let snapshot = store.load()?;
        let load_state = LoadState::from(&snapshot);
        if let LoadState::Corrupt(reason) = &load_state {
            info!("Starting with an empty catalog: {}", reason);
        }
        Ok(Self {
            store,
            catalog: Catalog::new(snapshot.into_books()),
            load_state,
        })
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn add_book(&mut self, title: String, author: String, year: Year) -> Result<CmdResult> {
        commands::add::run(&mut self.catalog, &mut self.store, title, author, year)
    }

    pub fn remove_book(&mut self, id: u64) -> Result<CmdResult> {
        commands::remove::run(&mut self.catalog, &mut self.store, id)
    }

    pub fn find_book(&self, id: u64) -> Option<&Book> {
        self.catalog.find_by_id(id)
    }

    pub fn search_books(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.catalog, query)
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn update_status(&mut self, id: u64, status: &str) -> Result<CmdResult> {
        commands::status::run(&mut self.catalog, &mut self.store, id, status)
    }

    /// Write the current catalog to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(self.catalog.books())
    }

    pub fn books(&self) -> &[Book] {
        self.catalog.books()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
