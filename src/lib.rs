//! # zookeepr
//!
//! An animal record collection with attribute queries and validated,
//! file-backed creation.
//!
//! ## Quick Start
//!
//! ```ignore
//! use zookeepr::prelude::*;
//!
//! // Open (or start) the collection
//! let store = RecordStore::open("data/animals.json")?;
//!
//! // Query: every criterion must hold, every listed trait must be present
//! let brave_herbivores = store.query(
//!     &Criteria::new().with_diet("herbivore").with_trait("brave"),
//! );
//!
//! // Create: validated, assigned the next id, written back to disk
//! let rex = store.create(json!({
//!     "name": "Rex",
//!     "species": "dog",
//!     "diet": "carnivore",
//!     "personalityTraits": ["loyal"]
//! }))?;
//! ```
//!
//! The HTTP server lives in the `zookeepr-server` crate.

#![warn(missing_docs)]

pub mod prelude;

// Re-export main entry points
pub use zookeepr_engine::{IdAllocator, LengthIdAllocator, RecordStore, RecordStoreBuilder};
pub use zookeepr_core::{Error, Result};

// Re-export the query engine and record types
pub use zookeepr_core::{filter, find_by_id, validate, Animal, Criteria};

// Re-export storage
pub use zookeepr_storage::{AnimalsDocument, JsonFileStorage, MemoryStorage, RecordStorage};
