//! Shared fixtures for integration tests.

#![allow(dead_code)]

pub use serde_json::{json, Value};
pub use std::sync::Arc;
pub use zookeepr::prelude::*;
pub use zookeepr::{filter, find_by_id, validate};

use tempfile::TempDir;

/// Five animals covering every filterable field.
pub fn zoo() -> Vec<Animal> {
    vec![
        Animal::new("0", "Sarah", "bear", "omnivore", ["hungry", "zany"]),
        Animal::new("1", "Noel", "bear", "carnivore", ["impish", "sassy", "brave"]),
        Animal::new("2", "Jameson", "dolphin", "herbivore", ["loving", "curious", "loyal"]),
        Animal::new("3", "Erica", "gorilla", "omnivore", ["quirky", "rash"]),
        Animal::new("4", "Mo", "elephant", "herbivore", ["curious", "brave", "loyal"]),
    ]
}

/// A well-formed creation candidate.
pub fn rex() -> Value {
    json!({
        "name": "Rex",
        "species": "dog",
        "diet": "carnivore",
        "personalityTraits": ["loyal"]
    })
}

/// File-backed store seeded with [`zoo`], living in a temp directory.
pub struct TestStore {
    pub dir: TempDir,
    pub store: RecordStore,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        JsonFileStorage::new(dir.path().join("animals.json"))
            .persist(&zoo())
            .expect("seed");
        let store = RecordStore::open(dir.path().join("animals.json")).expect("open");
        Self { dir, store }
    }

    pub fn data_file(&self) -> std::path::PathBuf {
        self.dir.path().join("animals.json")
    }

    /// Records as currently written on disk.
    pub fn on_disk(&self) -> Vec<Animal> {
        JsonFileStorage::new(self.data_file()).load().expect("load")
    }

    pub fn reopen(&self) -> RecordStore {
        RecordStore::open(self.data_file()).expect("reopen")
    }
}
