//! Storage layer for zookeepr
//!
//! This crate implements the backing store behind the record collection:
//! - RecordStorage: the port the record store persists through
//! - JsonFileStorage: a single JSON document rewritten in full on every write
//! - MemoryStorage: in-process storage for tests and ephemeral stores
//!
//! The persisted document has one top-level key wrapping the ordered records:
//!
//! ```json
//! { "animals": [ { "id": "0", "name": "Sarah", ... } ] }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod file;
pub mod memory;

pub use document::AnimalsDocument;
pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use zookeepr_core::{Animal, Result};

/// Durable medium holding the full record collection.
///
/// Implementations must make `persist` all-or-nothing from the reader's point
/// of view: after a failed call, `load` still returns the previous contents.
pub trait RecordStorage: Send + Sync {
    /// Read the full collection.
    fn load(&self) -> Result<Vec<Animal>>;

    /// Replace the stored collection with `records`.
    fn persist(&self, records: &[Animal]) -> Result<()>;
}
