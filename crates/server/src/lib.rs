//! HTTP surface for zookeepr.
//!
//! Routes:
//! - `GET /api/animals` — query by `personalityTraits` (repeatable), `diet`,
//!   `species`, `name`
//! - `GET /api/animals/:id` — one record, or 404
//! - `POST /api/animals` — validated creation from a JSON or url-encoded
//!   form body

pub mod config;
pub mod error;
pub mod form;
pub mod routes;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::{router, AppState};
