//! Storage directory structure.
//!
//! All durable state lives under one root directory:
//!
//! ```text
//! .fourier/
//! ├── databases/       # One blob per database: {name}.db
//! │   ├── shop.db
//! │   └── ...
//! ├── logs/            # Created alongside, unused by the store itself
//! └── .cache.json      # Server status record
//! ```

use std::io;
use std::path::{Path, PathBuf};

/// Extension given to every database blob file.
pub const BLOB_EXTENSION: &str = "db";

/// Directory name of the per-user default root.
const DEFAULT_ROOT_DIR: &str = ".fourier";

/// Paths within a storage root directory.
#[derive(Debug, Clone)]
pub struct StorageLayout {
    root: PathBuf,
}

impl StorageLayout {
    /// Create a layout rooted at the given directory.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        StorageLayout {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The per-user default root: `$HOME/.fourier`, with `USERPROFILE` as
    /// the fallback. Relative `.fourier` when neither is set.
    pub fn default_root() -> PathBuf {
        std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map(|home| PathBuf::from(home).join(DEFAULT_ROOT_DIR))
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ROOT_DIR))
    }

    /// The storage root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one blob file per database.
    pub fn databases_dir(&self) -> PathBuf {
        self.root.join("databases")
    }

    /// Log directory, created for completeness.
    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }

    /// The server status record.
    pub fn cache_file(&self) -> PathBuf {
        self.root.join(".cache.json")
    }

    /// Path of the blob for the named database.
    pub fn database_blob(&self, name: &str) -> PathBuf {
        self.databases_dir()
            .join(format!("{name}.{BLOB_EXTENSION}"))
    }

    /// Create the full directory structure. Idempotent.
    pub fn bootstrap(&self) -> io::Result<()> {
        std::fs::create_dir_all(self.databases_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}

impl Default for StorageLayout {
    fn default() -> Self {
        Self::from_root(Self::default_root())
    }
}
