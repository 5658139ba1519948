//! Identifier assignment
//!
//! New records get their id from an `IdAllocator`. The default,
//! [`LengthIdAllocator`], uses the pre-insertion length of the collection, so
//! ids run "0", "1", "2", ... for an append-only collection. It would hand out
//! duplicates if records were ever removed; swap the allocator before adding
//! any deletion path.

use zookeepr_core::Animal;

/// Chooses the id of the next record.
///
/// Called with the exclusive store lock held, so `records` is exactly the
/// collection the new record will be appended to.
pub trait IdAllocator: Send + Sync {
    /// Id for a record about to be appended to `records`.
    fn next_id(&self, records: &[Animal]) -> String;
}

/// Stringified collection length.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthIdAllocator;

impl IdAllocator for LengthIdAllocator {
    fn next_id(&self, records: &[Animal]) -> String {
        records.len().to_string()
    }
}
