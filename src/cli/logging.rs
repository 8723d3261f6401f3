//! Process-wide tracing subscriber
//!
//! Filter comes from `RUST_LOG`, defaulting to `info` for this crate and the
//! HTTP trace layer.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,estate_api=info,tower_http=info";

/// Install the fmt subscriber. Later calls are ignored.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
