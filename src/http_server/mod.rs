//! # HTTP Server Module
//!
//! Axum server exposing the listing API.
//!
//! # Endpoints
//!
//! - `/` - Health check
//! - `GET|POST /api/properties` - List (filter by `category`, `featured`) and create properties
//! - `GET|POST /api/reviews` - List (up to `limit`, default 20) and create reviews
//! - `POST /api/inquiries` - Create a contact inquiry

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod routes;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use routes::{ApiState, DEFAULT_REVIEW_LIMIT};
pub use server::{build_router, HttpServer};
