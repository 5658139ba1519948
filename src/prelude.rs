//! Convenient imports for zookeepr.
//!
//! ```ignore
//! use zookeepr::prelude::*;
//!
//! let store = RecordStore::ephemeral()?;
//! let bears = store.query(&Criteria::new().with_species("bear"));
//! ```

// Main entry point
pub use crate::{RecordStore, RecordStoreBuilder};

// Error handling
pub use crate::{Error, Result};

// Records and queries
pub use crate::{Animal, Criteria};

// Storage
pub use crate::{JsonFileStorage, MemoryStorage, RecordStorage};

// Re-export serde_json for convenience
pub use serde_json::json;
