//! In-memory storage
//!
//! Holds the last persisted collection in process memory. Useful for tests and
//! for stores that should leave nothing on disk. `fail_writes` makes every
//! subsequent `persist` fail, which lets callers exercise their
//! persistence-failure path without touching the filesystem.

use crate::RecordStorage;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use zookeepr_core::{Animal, Error, Result};

/// Storage that never leaves the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: Mutex<Vec<Animal>>,
    fail_writes: AtomicBool,
    writes: AtomicU64,
}

impl MemoryStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with `records`.
    pub fn with_records(records: Vec<Animal>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful `persist` calls.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    /// Copy of the currently stored collection.
    pub fn snapshot(&self) -> Vec<Animal> {
        self.records.lock().clone()
    }
}

impl RecordStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Animal>> {
        Ok(self.snapshot())
    }

    fn persist(&self, records: &[Animal]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::Storage("simulated write failure".into()));
        }
        *self.records.lock() = records.to_vec();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
