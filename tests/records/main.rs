//! Record Store Integration Tests
//!
//! Tests for the public facade: queries, lookups, creation and persistence.

#[path = "../common/mod.rs"]
mod common;

mod create;
mod persistence;
mod query;
