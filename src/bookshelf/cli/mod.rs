//! # CLI Layer
//!
//! The interactive menu is one client of `LibraryApi`. This layer is the only
//! place that reads stdin, writes stdout, sets up logging, and decides the
//! process exit status.
//!
//! - `setup`: command-line flags (clap)
//! - `shell`: the menu loop, generic over its input and output streams
//! - `print`: console formatting for books and messages

mod print;
mod setup;
mod shell;

use bookshelf::api::LibraryApi;
use bookshelf::config::ShelfConfig;
use bookshelf::error::Result;
use bookshelf::store::fs::JsonFileStore;
use clap::Parser;
use directories::ProjectDirs;
use log::{debug, warn};
use setup::Cli;
use shell::Shell;
use std::io;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config();
    let store = JsonFileStore::new(config.resolve_library_file(cli.file));
    debug!("Using catalog file {}", store.path().display());

    let api = LibraryApi::open(store)?;
    let stdin = io::stdin();
    let mut shell = Shell::new(api, stdin.lock(), io::stdout());
    shell.run()
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Config lives in the platform config dir; any problem with it falls back
/// to defaults rather than blocking the catalog.
fn load_config() -> ShelfConfig {
    let Some(dirs) = ProjectDirs::from("com", "bookshelf", "bookshelf") else {
        return ShelfConfig::default();
    };
    match ShelfConfig::load(dirs.config_dir()) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring configuration: {}", e);
            ShelfConfig::default()
        }
    }
}
