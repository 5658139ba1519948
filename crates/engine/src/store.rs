//! RecordStore: the shared animal collection
//!
//! The store is the only owner of the collection. Handlers hold an
//! `Arc<RecordStore>` and go through its methods; nothing else can reach the
//! records.
//!
//! ## Locking
//!
//! Creations are serialized by the `writer` mutex, which is held across id
//! assignment, the storage write, and publication. The `records` lock is only
//! ever held for in-memory work, so queries never wait on disk I/O.
//!
//! ## Failure policy
//!
//! `create` writes a staged copy of the collection (current records plus the
//! new one) and publishes it only after the write succeeds. A failed write
//! leaves the in-memory collection untouched, so it always matches the last
//! successful write.

use crate::id::{IdAllocator, LengthIdAllocator};
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info};
use zookeepr_core::validate::rejection_reason;
use zookeepr_core::{filter, find_by_id, validate, Animal, Criteria, Error, Result};
use zookeepr_storage::{JsonFileStorage, MemoryStorage, RecordStorage};

/// Shared handle to the animal collection.
///
/// # Example
///
/// ```ignore
/// let store = RecordStore::open("data/animals.json")?;
///
/// let bears = store.query(&Criteria::new().with_species("bear"));
/// let created = store.create(json!({
///     "name": "Rex",
///     "species": "dog",
///     "diet": "carnivore",
///     "personalityTraits": ["loyal"]
/// }))?;
/// assert_eq!(store.get(&created.id), Some(created));
/// ```
pub struct RecordStore {
    records: RwLock<Vec<Animal>>,
    writer: Mutex<()>,
    storage: Arc<dyn RecordStorage>,
    ids: Box<dyn IdAllocator>,
}

impl RecordStore {
    /// Open a store backed by the JSON document at `path`.
    ///
    /// A missing document opens as an empty collection; it is created on the
    /// first successful `create`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder()
            .storage(Arc::new(JsonFileStorage::new(path)))
            .open()
    }

    /// Open a store that keeps everything in process memory.
    pub fn ephemeral() -> Result<Self> {
        Self::builder().open()
    }

    /// Create a builder for store configuration.
    pub fn builder() -> RecordStoreBuilder {
        RecordStoreBuilder::new()
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Copy of the whole collection, in insertion order.
    pub fn all(&self) -> Vec<Animal> {
        self.records.read().clone()
    }

    /// Records matching `criteria`, in collection order.
    pub fn query(&self, criteria: &Criteria) -> Vec<Animal> {
        let records = self.records.read();
        let results: Vec<Animal> = filter(criteria, &records).into_iter().cloned().collect();
        debug!(
            "Query matched {} of {} animals",
            results.len(),
            records.len()
        );
        results
    }

    /// Record with identifier `id`, if any.
    pub fn get(&self, id: &str) -> Option<Animal> {
        find_by_id(id, &self.records.read()).cloned()
    }

    /// Record with identifier `id`, or `Error::NotFound`.
    pub fn require(&self, id: &str) -> Result<Animal> {
        self.get(id)
            .ok_or_else(|| Error::NotFound(format!("animal {}", id)))
    }

    /// Validate `candidate`, assign its id, append it and persist the collection.
    ///
    /// # Errors
    ///
    /// - `Error::Validation` if the candidate is malformed; nothing changes.
    /// - Any persistence error from the backing store; nothing is published
    ///   and the collection is left as it was.
    pub fn create(&self, candidate: Value) -> Result<Animal> {
        if !validate(&candidate) {
            let reason = rejection_reason(&candidate)
                .unwrap_or_else(|| "malformed animal".to_string());
            debug!("Rejected animal: {}", reason);
            return Err(Error::Validation(reason));
        }

        let _writer = self.writer.lock();

        // Only creations mutate `records`, and they all hold `writer`, so the
        // staged copy stays current until it is published below.
        let mut staged = self.records.read().clone();
        let id = self.ids.next_id(&staged);
        let animal = Animal::from_candidate(id, candidate)?;
        staged.push(animal.clone());

        if let Err(e) = self.storage.persist(&staged) {
            error!("Failed to persist animal {}: {}", animal.id, e);
            return Err(e);
        }
        *self.records.write() = staged;

        info!(
            "Created animal {} ({} the {})",
            animal.id, animal.name, animal.species
        );
        Ok(animal)
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Builder for store configuration.
///
/// # Example
///
/// ```ignore
/// // Production: file-backed
/// let store = RecordStore::builder()
///     .storage(Arc::new(JsonFileStorage::new("data/animals.json")))
///     .open()?;
///
/// // Testing: in memory, nothing on disk
/// let store = RecordStore::builder().open()?;
/// ```
pub struct RecordStoreBuilder {
    storage: Option<Arc<dyn RecordStorage>>,
    ids: Box<dyn IdAllocator>,
}

impl RecordStoreBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            storage: None,
            ids: Box::new(LengthIdAllocator),
        }
    }

    /// Set the backing storage (defaults to [`MemoryStorage`]).
    pub fn storage(mut self, storage: Arc<dyn RecordStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Replace the id assignment scheme.
    pub fn id_allocator(mut self, ids: impl IdAllocator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Load the collection and open the store.
    pub fn open(self) -> Result<RecordStore> {
        let storage = self
            .storage
            .unwrap_or_else(|| Arc::new(MemoryStorage::new()));
        let records = storage.load()?;
        Ok(RecordStore {
            records: RwLock::new(records),
            writer: Mutex::new(()),
            storage,
            ids: self.ids,
        })
    }
}

impl Default for RecordStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
