//! estate-api - REST backend for a real-estate listing site
//!
//! Properties, reviews and inquiries are validated against their schemas,
//! written to a document store, and served back with a public string `id`.

pub mod cli;
pub mod entities;
pub mod http_server;
pub mod schema;
pub mod serialize;
pub mod store;
