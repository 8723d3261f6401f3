//! Listing HTTP Routes
//!
//! Endpoints for properties, reviews and inquiries. Each handler validates,
//! makes a single store round trip, and serializes the result.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::errors::ApiResult;
use crate::entities::{Entity, Inquiry, Property, Review};
use crate::serialize::{serialize_documents, Created};
use crate::store::{Document, DocumentFilter, DocumentId, DocumentStore};

/// Review listing size when the caller gives no `limit`
pub const DEFAULT_REVIEW_LIMIT: usize = 20;

// ==================
// Shared State
// ==================

/// State shared across handlers: the process-wide store handle
pub struct ApiState<S> {
    pub store: S,
}

impl<S: DocumentStore> ApiState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

type SharedState<S> = Arc<ApiState<S>>;

// ==================
// Query Types
// ==================

#[derive(Debug, Default, Deserialize)]
pub struct PropertyQuery {
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub featured: Option<bool>,
}

/// Accepts `true/false`, `1/0`, `yes/no`, `on/off`, `t/f`, `y/n`, any case.
fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(Some(true)),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(Some(false)),
        _ => Err(serde::de::Error::custom(format!(
            "featured: expected a boolean, got '{}'",
            raw
        ))),
    }
}

impl PropertyQuery {
    /// Exact-match filter; an empty category is treated as absent.
    pub fn to_filter(&self) -> DocumentFilter {
        let mut filter = DocumentFilter::new();
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            filter = filter.eq("category", category);
        }
        if let Some(featured) = self.featured {
            filter = filter.eq("featured", featured);
        }
        filter
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ReviewQuery {
    pub limit: Option<usize>,
}

// ==================
// Routes
// ==================

/// Create the `/api` routes
pub fn api_routes<S: DocumentStore + 'static>(state: SharedState<S>) -> Router {
    Router::new()
        .route(
            "/properties",
            get(list_properties::<S>).post(create_property::<S>),
        )
        .route("/reviews", get(list_reviews::<S>).post(create_review::<S>))
        .route("/inquiries", post(create_inquiry::<S>))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Validates `body` as `E` and persists it.
async fn create_entity<E: Entity, S: DocumentStore>(store: &S, body: &Value) -> ApiResult<DocumentId> {
    let document = E::from_json(body)?.to_document()?;
    let id = store.create_document(E::COLLECTION, document).await?;
    tracing::info!(collection = E::COLLECTION, id = %id, "DOCUMENT_CREATED");
    Ok(id)
}

fn created(id: DocumentId) -> (StatusCode, Json<Created>) {
    (StatusCode::CREATED, Json(Created { id }))
}

// ==================
// Property Handlers
// ==================

async fn list_properties<S: DocumentStore + 'static>(
    State(state): State<SharedState<S>>,
    query: Result<Query<PropertyQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Document>>> {
    let Query(query) = query?;
    let documents = state
        .store
        .get_documents(Property::COLLECTION, &query.to_filter(), None)
        .await?;
    Ok(Json(serialize_documents(documents)))
}

async fn create_property<S: DocumentStore + 'static>(
    State(state): State<SharedState<S>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Created>)> {
    let Json(body) = body?;
    let id = create_entity::<Property, S>(&state.store, &body).await?;
    Ok(created(id))
}

// ==================
// Review Handlers
// ==================

async fn list_reviews<S: DocumentStore + 'static>(
    State(state): State<SharedState<S>>,
    query: Result<Query<ReviewQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Document>>> {
    let Query(query) = query?;
    let limit = query.limit.unwrap_or(DEFAULT_REVIEW_LIMIT);
    let documents = state
        .store
        .get_documents(Review::COLLECTION, &DocumentFilter::new(), Some(limit))
        .await?;
    Ok(Json(serialize_documents(documents)))
}

async fn create_review<S: DocumentStore + 'static>(
    State(state): State<SharedState<S>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Created>)> {
    let Json(body) = body?;
    let id = create_entity::<Review, S>(&state.store, &body).await?;
    Ok(created(id))
}

// ==================
// Inquiry Handlers
// ==================

async fn create_inquiry<S: DocumentStore + 'static>(
    State(state): State<SharedState<S>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Created>)> {
    let Json(body) = body?;
    let id = create_entity::<Inquiry, S>(&state.store, &body).await?;
    Ok(created(id))
}
