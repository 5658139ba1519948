//! Request handlers and router

use crate::error::ApiError;
use crate::form::{pairs_to_value, parse_pairs};
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{header, HeaderMap};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use zookeepr_core::{Animal, Criteria, Error};
use zookeepr_engine::RecordStore;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RecordStore>,
}

impl AppState {
    /// Wrap `store` for sharing across requests.
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Underlying record store.
    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/animals", get(list_animals).post(create_animal))
        .route("/api/animals/:id", get(get_animal))
        .with_state(state)
}

async fn list_animals(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Json<Vec<Animal>> {
    let params = query.as_deref().map(str::as_bytes).unwrap_or_default();
    let criteria = match serde_json::from_value::<Criteria>(pairs_to_value(parse_pairs(params))) {
        Ok(criteria) => criteria,
        Err(e) => {
            warn!("Unusable query {:?}: {}", query, e);
            return Json(Vec::new());
        }
    };
    debug!("GET /api/animals {:?}", criteria);
    Json(state.store.query(&criteria))
}

async fn get_animal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Animal>, ApiError> {
    Ok(Json(state.store.require(&id)?))
}

async fn create_animal(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Animal>, ApiError> {
    let candidate = decode_candidate(&headers, &body)?;

    // The storage write blocks; keep it off the async workers.
    let store = state.store.clone();
    let animal = tokio::task::spawn_blocking(move || store.create(candidate)).await??;
    Ok(Json(animal))
}

/// Decode a creation body: url-encoded forms by content type, JSON otherwise.
fn decode_candidate(headers: &HeaderMap, body: &[u8]) -> Result<Value, Error> {
    if is_form(headers) {
        return Ok(pairs_to_value(parse_pairs(body)));
    }
    serde_json::from_slice(body).map_err(|e| Error::Validation(format!("invalid JSON body: {}", e)))
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map_or(false, |mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}
