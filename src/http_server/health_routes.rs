//! Root liveness route
//!
//! Answers without touching the store, so it stays 200 while the database is
//! unreachable.

use axum::{routing::get, Json, Router};
use serde::Serialize;

const RUNNING_MESSAGE: &str = "Real Estate API running";

#[derive(Debug, Clone, Serialize)]
pub struct Liveness {
    pub message: &'static str,
    pub version: &'static str,
    /// Backend the API was started with
    pub store: &'static str,
}

impl Liveness {
    pub fn new(store: &'static str) -> Self {
        Self {
            message: RUNNING_MESSAGE,
            version: env!("CARGO_PKG_VERSION"),
            store,
        }
    }
}

/// `GET /` for a server attached to the `store` backend
pub fn health_routes(store: &'static str) -> Router {
    let liveness = Liveness::new(store);
    Router::new().route("/", get(move || async move { Json(liveness) }))
}
