//! Entity definitions
//!
//! Each entity pairs a typed record with the schema that guards it. Records
//! are built validate-then-construct: the schema checks the raw body and
//! fills defaults, then serde builds the typed value from the checked map.
//!
//! Collections are named after the lowercase entity name.

mod category;
mod inquiry;
mod property;
mod review;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::schema::{FieldViolation, Schema, SchemaResult, SchemaValidator, ValidationError};
use crate::store::Document;

pub use category::Category;
pub use inquiry::Inquiry;
pub use property::Property;
pub use review::Review;

/// A persisted entity type.
pub trait Entity: Serialize + DeserializeOwned + Send {
    /// Collection the entity is stored in
    const COLLECTION: &'static str;

    /// Validation rules and defaults
    fn schema() -> &'static Schema;

    /// Validates an untyped body and builds the entity.
    fn from_json(body: &Value) -> SchemaResult<Self> {
        let record = SchemaValidator::new(Self::schema()).validate(body)?;
        serde_json::from_value(Value::Object(record)).map_err(|e| {
            ValidationError::single(
                Self::COLLECTION,
                FieldViolation::type_mismatch("$root", Self::COLLECTION, e.to_string()),
            )
        })
    }

    /// The fully populated document written to the store.
    fn to_document(&self) -> serde_json::Result<Document> {
        match serde_json::to_value(self)? {
            Value::Object(document) => Ok(document),
            other => Err(serde::ser::Error::custom(format!(
                "{} serialized to a non-object: {}",
                Self::COLLECTION,
                other
            ))),
        }
    }
}
