//! # Bookshelf Architecture
//!
//! Bookshelf keeps a personal book catalog in a single JSON file. Like any
//! front end, the interactive menu in the binary is just one client of the
//! library; everything it does goes through [`api::LibraryApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, console formatting                   │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the catalog and its store, loads once on open       │
//! │  - Returns Result<CmdResult> / typed ShelfError             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Catalog (catalog.rs)       │
//! │  - Add, remove, search, list, status update                 │
//! │  - Every mutation rewrites the whole store                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore trait                                          │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Lookup and validation failures are `ShelfError` values, so a
//! test harness or another UI can react to them directly.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`catalog`]: In-memory ordered collection, id assignment and matching
//! - [`commands`]: One module per catalog operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book`, `Status`, `Year`
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
