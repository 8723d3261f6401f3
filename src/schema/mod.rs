//! Schema validation subsystem
//!
//! Schemas are the single source of truth for record structure. Every
//! document is validated here before it may reach the store; the store
//! itself enforces nothing.
//!
//! # Design Principles
//!
//! - Validation before persistence
//! - All-or-nothing: a record is accepted whole or rejected whole
//! - Every failing field is reported, not just the first
//! - Defaults are applied for absent optional fields
//! - Deterministic validation

mod errors;
mod types;
mod validator;

pub use errors::{FieldViolation, SchemaResult, ValidationError, ViolationKind};
pub use types::{Constraints, FieldDef, FieldType, Schema, RESERVED_FIELDS};
pub use validator::SchemaValidator;
