//! Core types for zookeepr
//!
//! This crate defines the pieces every other layer shares:
//! - Animal: the record type held in the collection
//! - Criteria: the filter constraints of a query
//! - filter / find_by_id: the pure query engine
//! - validate: the structural check for creation candidates
//! - Error: the canonical error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animal;
pub mod criteria;
pub mod error;
pub mod filter;
pub mod validate;

pub use animal::Animal;
pub use criteria::{Criteria, FieldMatch};
pub use error::{Error, Result};
pub use filter::{filter, find_by_id};
pub use validate::validate;
