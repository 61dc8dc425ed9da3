//! Durable storage for FourierDB.
//!
//! This crate maps database names to durable blobs under a fixed root
//! directory. A database is the unit of durability: every save serializes
//! the complete snapshot (all collections, all documents) and overwrites
//! the blob in full; every load deserializes the complete snapshot back.
//!
//! # Storage Backends
//!
//! All backends implement the [`DatabaseStore`] trait:
//!
//! - [`FileStore`] -- one JSON blob per database at `databases/{name}.db`
//! - [`MemoryStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Whole-object snapshotting: no incremental writes, no partial updates.
//! 2. No locking around load-mutate-save cycles; concurrent cycles against
//!    one database can lose the earlier update.
//! 3. Saves overwrite in place without a rename step; a crash mid-save can
//!    leave a torn blob for that one database only.
//! 4. Names are validated before touching the filesystem.
//! 5. I/O and corruption failures are propagated, never retried.

pub mod cache;
pub mod error;
pub mod file;
pub mod layout;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use cache::{read_status, write_status, ServerStatus};
pub use error::{Result, StoreError};
pub use file::FileStore;
pub use layout::StorageLayout;
pub use memory::MemoryStore;
pub use traits::DatabaseStore;
