//! Collections: named sets of documents keyed by identifier.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::id::DocumentId;

/// A named mapping from document identifier to document.
///
/// Identifiers are unique within one collection only. Inserting at an
/// occupied identifier overwrites the previous entry; that upsert behavior
/// is the defined semantics, not an error case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    name: String,
    documents: BTreeMap<DocumentId, Document>,
}

impl Collection {
    /// Build a collection from initial documents, indexing each under its
    /// `_id`. When two inputs share an identifier the later one wins
    /// silently, mirroring plain map insertion.
    pub fn new(name: impl Into<String>, documents: impl IntoIterator<Item = Document>) -> Self {
        let documents = documents
            .into_iter()
            .map(|doc| (doc.id(), doc))
            .collect::<BTreeMap<_, _>>();
        Self {
            name: name.into(),
            documents,
        }
    }

    /// The collection name, fixed at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert or overwrite the entry at the document's identifier and
    /// return that identifier.
    pub fn insert(&mut self, document: Document) -> DocumentId {
        let id = document.id();
        self.documents.insert(id, document);
        id
    }

    /// Look up a document by identifier.
    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(&id)
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when the collection holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over every document with its identifier.
    pub fn iter(&self) -> impl Iterator<Item = (&DocumentId, &Document)> {
        self.documents.iter()
    }

    /// Borrow the underlying document map.
    pub fn documents(&self) -> &BTreeMap<DocumentId, Document> {
        &self.documents
    }
}
