//! On-disk document shape

use serde::{Deserialize, Serialize};
use zookeepr_core::{Animal, Result};

/// The persisted document: `{ "animals": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalsDocument {
    /// Ordered record sequence
    pub animals: Vec<Animal>,
}

/// Borrowed form used when writing, so persisting never clones the collection.
#[derive(Serialize)]
struct AnimalsDocumentRef<'a> {
    animals: &'a [Animal],
}

impl AnimalsDocument {
    /// Decode a document from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Encode `records` as a pretty-printed document (2-space indent).
    pub fn encode(records: &[Animal]) -> Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec_pretty(&AnimalsDocumentRef { animals: records })?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}
