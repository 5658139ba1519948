//! HTTP error mapping
//!
//! | Error | Status | Body |
//! |-------|--------|------|
//! | Validation | 400 | `The animal is not properly formatted.` |
//! | NotFound | 404 | empty |
//! | anything else | 500 | error text |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Fixed message returned for malformed creation payloads.
pub const NOT_PROPERLY_FORMATTED: &str = "The animal is not properly formatted.";

/// Error returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure reported by the record store
    #[error(transparent)]
    Store(#[from] zookeepr_core::Error),

    /// The blocking task running a store operation did not complete
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    /// Status code this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            ApiError::Store(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match status {
            StatusCode::BAD_REQUEST => (status, NOT_PROPERLY_FORMATTED).into_response(),
            StatusCode::NOT_FOUND => status.into_response(),
            _ => {
                error!("Request failed: {}", self);
                (status, self.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zookeepr_core::Error;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(Error::Validation("missing diet".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(Error::NotFound("animal 9".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(Error::Storage("disk full".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
