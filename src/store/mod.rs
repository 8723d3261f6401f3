//! Document store adapter
//!
//! Two collection-scoped primitives, create and query, over a schema-less
//! document database. No business logic lives here: records arrive already
//! validated and leave untouched apart from the identifier, which stores
//! surface separately from the document body.
//!
//! Backends:
//! - [`MongoStore`]: MongoDB via the official driver
//! - [`MemoryStore`]: insertion-ordered in-process collections, for tests and
//!   local development

mod errors;
mod filter;
mod id;
mod memory;
mod mongo;

use async_trait::async_trait;
use serde_json::{Map, Value};

pub use errors::{StoreError, StoreResult};
pub use filter::DocumentFilter;
pub use id::DocumentId;
pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Untyped key-value document as handed to and returned by a store
pub type Document = Map<String, Value>;

/// A document read back from a store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    /// Store-assigned identifier; `None` for records that never came from a store
    pub id: Option<DocumentId>,
    /// Document body, without any identifier field
    pub fields: Document,
}

impl StoredDocument {
    pub fn new(id: DocumentId, fields: Document) -> Self {
        Self {
            id: Some(id),
            fields,
        }
    }
}

impl From<Document> for StoredDocument {
    fn from(fields: Document) -> Self {
        Self { id: None, fields }
    }
}

/// Collection-scoped storage backend.
///
/// Implementations must provide atomic single-document inserts and isolated
/// reads; callers impose no ordering between concurrent requests.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts `record` into `collection` and returns its new identifier.
    async fn create_document(&self, collection: &str, record: Document) -> StoreResult<DocumentId>;

    /// Returns documents of `collection` matching `filter`, in natural order,
    /// at most `limit` of them.
    async fn get_documents(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: Option<usize>,
    ) -> StoreResult<Vec<StoredDocument>>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}
