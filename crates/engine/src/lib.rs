//! Record store for zookeepr
//!
//! This crate owns the in-memory animal collection:
//! - RecordStore: shared handle with query, lookup, and validated append
//! - RecordStoreBuilder: wiring of storage and id assignment
//! - IdAllocator: the seam that decides the id of each new record
//!
//! # Concurrency
//!
//! Reads take a shared lock and return owned copies. `create` holds the
//! exclusive lock across id assignment, append, and the storage write, so two
//! concurrent creations can never observe the same length or interleave their
//! writes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod id;
pub mod store;

pub use id::{IdAllocator, LengthIdAllocator};
pub use store::{RecordStore, RecordStoreBuilder};
