use crate::error::{Result, ShelfError};
use crate::store::fs::DEFAULT_LIBRARY_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for bookshelf, stored as `config.json` in the user's config dir
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Backing JSON file for the catalog. Relative paths resolve against the
    /// working directory.
    #[serde(default = "default_library_file")]
    pub library_file: PathBuf,
}

fn default_library_file() -> PathBuf {
    PathBuf::from(DEFAULT_LIBRARY_FILE)
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            library_file: default_library_file(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig = serde_json::from_str(&content).map_err(|e| {
            ShelfError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    /// The file to use: an explicit override wins over the configured one.
    pub fn resolve_library_file(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit.unwrap_or_else(|| self.library_file.clone())
    }
}
