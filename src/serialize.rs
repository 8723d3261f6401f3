//! # Wire serialization
//!
//! Outbound records carry the store identifier as a string under `id`; the
//! internal `_id` never leaves the process. Creation responses echo only the
//! new identifier.

use serde::Serialize;
use serde_json::Value;

use crate::store::{Document, DocumentId, StoredDocument};

/// Public identifier field on outbound records
pub const PUBLIC_ID_FIELD: &str = "id";

/// Store-internal identifier field
pub const INTERNAL_ID_FIELD: &str = "_id";

/// Body of a successful create: `{"id": "<string>"}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Created {
    pub id: DocumentId,
}

/// Converts a stored document into its wire form.
///
/// Empty input passes through unchanged, as does a record that is already in
/// wire form (no store identifier).
pub fn serialize_document(document: StoredDocument) -> Document {
    let StoredDocument { id, mut fields } = document;
    let Some(id) = id else {
        return fields;
    };
    fields.remove(INTERNAL_ID_FIELD);
    fields.insert(PUBLIC_ID_FIELD.to_string(), Value::String(id.to_string()));
    fields
}

/// Serializes a batch of stored documents, preserving order.
pub fn serialize_documents(documents: Vec<StoredDocument>) -> Vec<Document> {
    documents.into_iter().map(serialize_document).collect()
}
