use super::{BookStore, Snapshot};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use log::{debug, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_LIBRARY_FILE: &str = "library.json";
const INDENT: &[u8] = b"    ";

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }
        Ok(())
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> Result<Snapshot> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No library file at {}", self.path.display());
                return Ok(Snapshot::Fresh);
            }
            // Non-UTF-8 bytes are a decoding problem, not an I/O one
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                info!("Ignoring unreadable library file {}: {}", self.path.display(), e);
                return Ok(Snapshot::Corrupt {
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(ShelfError::Io(e)),
        };

        match serde_json::from_str::<Vec<Book>>(&content) {
            Ok(books) => {
                debug!("Loaded {} books from {}", books.len(), self.path.display());
                Ok(Snapshot::Loaded(books))
            }
            Err(e) => {
                info!("Ignoring unparsable library file {}: {}", self.path.display(), e);
                Ok(Snapshot::Corrupt {
                    reason: e.to_string(),
                })
            }
        }
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.ensure_parent_dir()?;

        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        books.serialize(&mut ser).map_err(ShelfError::Serialization)?;

        fs::write(&self.path, buf).map_err(ShelfError::Io)?;
        debug!("Saved {} books to {}", books.len(), self.path.display());
        Ok(())
    }
}
