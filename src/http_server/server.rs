//! # HTTP Server
//!
//! Combines the health and `/api` routers behind CORS and request tracing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::ServerConfig;
use super::health_routes::health_routes;
use super::routes::{api_routes, ApiState};
use crate::store::DocumentStore;

/// HTTP server for the listing API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `store`
    pub fn new<S: DocumentStore + 'static>(config: ServerConfig, store: S) -> Self {
        let router = build_router(&config, store);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "SERVER_LISTENING");
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Build the combined router with all endpoints
pub fn build_router<S: DocumentStore + 'static>(config: &ServerConfig, store: S) -> Router {
    let backend = store.backend_name();
    tracing::info!(backend, "STORE_ATTACHED");
    let state = Arc::new(ApiState::new(store));

    Router::new()
        .merge(health_routes(backend))
        .nest("/api", api_routes(state))
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = origins
        .iter()
        .filter_map(|s| match s.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!(origin = %s, "CORS_ORIGIN_IGNORED");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
