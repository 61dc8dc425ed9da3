use fourier_core::Database;

use crate::error::Result;

/// Durable storage keyed by database name, one blob per database.
///
/// All implementations must satisfy these invariants:
/// - A database is stored and loaded whole. `save` overwrites the complete
///   snapshot; there is no incremental or partial write path.
/// - No backend locks around a caller's load-mutate-save cycle. Two
///   concurrent cycles against the same name may interleave, and the later
///   save silently overwrites the earlier one's effect.
/// - Names are validated before any operation touches backend state;
///   invalid names fail with `InvalidName` and have no side effects.
/// - I/O and corruption failures are propagated, never retried.
pub trait DatabaseStore: Send + Sync {
    /// Check whether a blob exists for the named database.
    fn exists(&self, name: &str) -> Result<bool>;

    /// Load the full snapshot of the named database.
    ///
    /// Fails with `NotFound` if no blob exists and `Corrupt` if the blob
    /// does not deserialize.
    fn load(&self, name: &str) -> Result<Database>;

    /// Serialize the entire database and overwrite its blob in full.
    fn save(&self, database: &Database) -> Result<()>;

    /// Remove the blob for the named database.
    ///
    /// Fails with `NotFound` if no blob exists.
    fn delete(&self, name: &str) -> Result<()>;

    /// Enumerate the names of all stored databases, sorted.
    fn list(&self) -> Result<Vec<String>>;
}
