use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a document within its collection.
///
/// A `DocumentId` is the 64-bit snowflake assigned when a document is
/// created (or the caller-supplied `_id` it was created with). Identifiers
/// are unique per collection, not globally; two collections may reuse the
/// same value.
///
/// Serializes as a bare integer. When used as a map key, `serde_json`
/// renders it as a JSON object key (a decimal string) and parses it back,
/// so keyed collections round-trip exactly.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId(u64);

impl DocumentId {
    /// Wrap a raw 64-bit identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw 64-bit value.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentId({})", self.0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for DocumentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<DocumentId> for u64 {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}
