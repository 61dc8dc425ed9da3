//! Databases: named sets of collections, the unit of durability.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::error::{ModelError, Result};

/// A named mapping from collection name to collection.
///
/// The database name is the key under which the persistence layer locates
/// its durable blob; a database is always stored and loaded whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    name: String,
    collections: BTreeMap<String, Collection>,
}

impl Database {
    /// Build an empty database.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: BTreeMap::new(),
        }
    }

    /// The database name, fixed at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert the collection under its name, returning the displaced
    /// collection if one was already there. Conflict rejection is the
    /// gateway's job; at this level overwrite is the defined semantics.
    pub fn add_collection(&mut self, collection: Collection) -> Option<Collection> {
        self.collections
            .insert(collection.name().to_owned(), collection)
    }

    /// Remove and return the named collection.
    pub fn remove_collection(&mut self, name: &str) -> Result<Collection> {
        self.collections
            .remove(name)
            .ok_or_else(|| ModelError::CollectionNotFound {
                name: name.to_string(),
            })
    }

    /// Look up a collection by name.
    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.get(name)
    }

    /// Look up a collection by name for mutation.
    pub fn collection_mut(&mut self, name: &str) -> Option<&mut Collection> {
        self.collections.get_mut(name)
    }

    /// True when the database holds a collection of that name.
    pub fn contains_collection(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    /// Number of collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// True when the database holds no collections.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Iterate over every collection by name.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Collection)> {
        self.collections.iter()
    }
}
