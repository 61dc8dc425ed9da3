//! Core data model for FourierDB.
//!
//! This crate provides the in-memory hierarchy (database → collection →
//! document), snowflake identifier assignment, and resource name
//! validation. Every other FourierDB crate depends on `fourier-core`.
//!
//! # Key Types
//!
//! - [`Document`]: a flat field map carrying the reserved `_id` field
//! - [`Collection`]: documents keyed by [`DocumentId`], unique per collection
//! - [`Database`]: collections keyed by name, the unit of durability
//! - [`DocumentId`]: 64-bit document identifier produced by [`snowflake`]

pub mod collection;
pub mod database;
pub mod document;
pub mod error;
pub mod id;
pub mod names;
pub mod snowflake;

pub use collection::Collection;
pub use database::Database;
pub use document::{Document, ID_FIELD};
pub use error::ModelError;
pub use id::DocumentId;
pub use snowflake::construct_snowflake;
