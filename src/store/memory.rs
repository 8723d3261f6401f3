//! An in-memory document store, geared towards testing and local development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Document, DocumentFilter, DocumentId, DocumentStore, StoreError, StoreResult, StoredDocument};

type Collections = HashMap<String, Vec<(DocumentId, Document)>>;

/// An in-memory document store.
///
/// # Limitations
///
/// This store won't persist data between server restarts.
/// It also won't synchronize data between multiple server instances.
#[derive(Clone)]
pub struct MemoryStore {
    collections: Arc<RwLock<Collections>>,
    connected: bool,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("connected", &self.connected)
            .finish_non_exhaustive()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates a new (empty) in-memory store.
    pub fn new() -> Self {
        Self {
            collections: Arc::new(RwLock::new(HashMap::new())),
            connected: true,
        }
    }

    /// A store that behaves as if no connection was ever established.
    pub fn unavailable() -> Self {
        Self {
            connected: false,
            ..Self::new()
        }
    }

    /// Number of documents currently held in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }

    fn ensure_connected(&self) -> StoreResult<()> {
        if self.connected {
            Ok(())
        } else {
            Err(StoreError::Unavailable("in-memory store is disconnected".into()))
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    #[tracing::instrument(name = "Create in-memory document", level = tracing::Level::TRACE, skip(self, record))]
    async fn create_document(&self, collection: &str, record: Document) -> StoreResult<DocumentId> {
        self.ensure_connected()?;
        let id = DocumentId::from(Uuid::new_v4());
        let mut guard = self.collections.write().await;
        guard
            .entry(collection.to_string())
            .or_default()
            .push((id.clone(), record));
        Ok(id)
    }

    #[tracing::instrument(name = "Query in-memory documents", level = tracing::Level::TRACE, skip(self, filter))]
    async fn get_documents(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: Option<usize>,
    ) -> StoreResult<Vec<StoredDocument>> {
        self.ensure_connected()?;
        let guard = self.collections.read().await;
        let Some(documents) = guard.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(documents
            .iter()
            .filter(|(_, doc)| filter.matches(doc))
            .take(limit.unwrap_or(usize::MAX))
            .map(|(id, doc)| StoredDocument::new(id.clone(), doc.clone()))
            .collect())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
