use std::collections::HashMap;
use std::sync::RwLock;

use fourier_core::names::validate_name;
use fourier_core::Database;

use crate::error::{Result, StoreError};
use crate::traits::DatabaseStore;

/// In-memory, HashMap-based database store.
///
/// Intended for tests and embedding. Snapshots are held behind a `RwLock`
/// and cloned on load/save, so callers observe the same whole-snapshot
/// semantics as the file backend.
pub struct MemoryStore {
    databases: RwLock<HashMap<String, Database>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            databases: RwLock::new(HashMap::new()),
        }
    }

    /// Number of databases currently stored.
    pub fn len(&self) -> usize {
        self.databases.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.databases.read().expect("lock poisoned").is_empty()
    }

    /// Remove all databases from the store.
    pub fn clear(&self) {
        self.databases.write().expect("lock poisoned").clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DatabaseStore for MemoryStore {
    fn exists(&self, name: &str) -> Result<bool> {
        validate_name(name)?;
        let map = self.databases.read().expect("lock poisoned");
        Ok(map.contains_key(name))
    }

    fn load(&self, name: &str) -> Result<Database> {
        validate_name(name)?;
        let map = self.databases.read().expect("lock poisoned");
        map.get(name).cloned().ok_or_else(|| StoreError::NotFound {
            name: name.to_string(),
        })
    }

    fn save(&self, database: &Database) -> Result<()> {
        validate_name(database.name())?;
        let mut map = self.databases.write().expect("lock poisoned");
        map.insert(database.name().to_owned(), database.clone());
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<()> {
        validate_name(name)?;
        let mut map = self.databases.write().expect("lock poisoned");
        map.remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })
    }

    fn list(&self) -> Result<Vec<String>> {
        let map = self.databases.read().expect("lock poisoned");
        let mut names: Vec<String> = map.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("database_count", &self.len())
            .finish()
    }
}
