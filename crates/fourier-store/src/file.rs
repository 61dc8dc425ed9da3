use std::fs;
use std::io;

use tracing::debug;

use fourier_core::names::validate_name;
use fourier_core::Database;

use crate::error::{Result, StoreError};
use crate::layout::{StorageLayout, BLOB_EXTENSION};
use crate::traits::DatabaseStore;

/// File-backed database store.
///
/// Each database is one JSON blob at `databases/{name}.db` under the layout
/// root. Saves overwrite the blob in place; a crash mid-save can leave a
/// torn blob, and nothing coordinates concurrent load-mutate-save cycles.
pub struct FileStore {
    layout: StorageLayout,
}

impl FileStore {
    /// Open a store over the given layout, creating its directories.
    pub fn open(layout: StorageLayout) -> Result<Self> {
        layout.bootstrap()?;
        Ok(Self { layout })
    }

    /// The layout this store operates on.
    pub fn layout(&self) -> &StorageLayout {
        &self.layout
    }
}

impl DatabaseStore for FileStore {
    fn exists(&self, name: &str) -> Result<bool> {
        validate_name(name)?;
        Ok(self.layout.database_blob(name).is_file())
    }

    fn load(&self, name: &str) -> Result<Database> {
        validate_name(name)?;
        let path = self.layout.database_blob(name);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    name: name.to_string(),
                })
            }
            Err(err) => return Err(err.into()),
        };
        let database = serde_json::from_slice(&bytes).map_err(|err| StoreError::Corrupt {
            name: name.to_string(),
            reason: err.to_string(),
        })?;
        debug!(db = name, bytes = bytes.len(), "loaded database blob");
        Ok(database)
    }

    fn save(&self, database: &Database) -> Result<()> {
        validate_name(database.name())?;
        let bytes = serde_json::to_vec(database)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        // In-place overwrite with no rename step: a crash inside this call
        // can leave a torn blob for this one database.
        fs::write(self.layout.database_blob(database.name()), &bytes)?;
        debug!(db = database.name(), bytes = bytes.len(), "saved database blob");
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<()> {
        validate_name(name)?;
        match fs::remove_file(self.layout.database_blob(name)) {
            Ok(()) => {
                debug!(db = name, "deleted database blob");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(StoreError::NotFound {
                name: name.to_string(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(self.layout.databases_dir())? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BLOB_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore")
            .field("root", &self.layout.root())
            .finish()
    }
}
