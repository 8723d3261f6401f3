//! MongoDB document store
//!
//! Documents are converted to BSON on the way in and to relaxed extended JSON
//! on the way out. The `_id` field is split off every returned document and
//! surfaced as a [`DocumentId`].

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{self, Bson};
use mongodb::{Client, Database};
use serde_json::Value;

use super::{Document, DocumentFilter, DocumentId, DocumentStore, StoreError, StoreResult, StoredDocument};

const ID_FIELD: &str = "_id";

/// MongoDB-backed store.
///
/// Holds a process-wide database handle. A store built without a database
/// URL is *disconnected* and fails every operation with
/// [`StoreError::Unavailable`]; there is no reconnection.
#[derive(Clone, Debug)]
pub struct MongoStore {
    database: Option<Database>,
}

impl MongoStore {
    /// Opens a client for `url` and selects `database_name`.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first operation as [`StoreError::Unavailable`].
    pub async fn connect(url: &str, database_name: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(url)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        tracing::info!(database = database_name, "STORE_CONNECTED");
        Ok(Self {
            database: Some(client.database(database_name)),
        })
    }

    /// A store with no connection.
    pub fn disconnected() -> Self {
        Self { database: None }
    }

    /// Name of the selected database, if connected
    pub fn database_name(&self) -> Option<&str> {
        self.database.as_ref().map(Database::name)
    }

    fn database(&self) -> StoreResult<&Database> {
        self.database
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("no database URL configured".into()))
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    #[tracing::instrument(name = "Insert MongoDB document", level = tracing::Level::TRACE, skip(self, record))]
    async fn create_document(&self, collection: &str, record: Document) -> StoreResult<DocumentId> {
        let database = self.database()?;
        let document = bson::to_document(&record).map_err(|e| StoreError::Persistence(e.to_string()))?;
        let collection = database.collection::<bson::Document>(collection);
        let result = collection.insert_one(document).await?;
        Ok(id_from_bson(result.inserted_id))
    }

    #[tracing::instrument(name = "Find MongoDB documents", level = tracing::Level::TRACE, skip(self, filter))]
    async fn get_documents(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: Option<usize>,
    ) -> StoreResult<Vec<StoredDocument>> {
        let database = self.database()?;
        // MongoDB reads a limit of 0 as "no limit".
        if limit == Some(0) {
            return Ok(Vec::new());
        }

        let collection = database.collection::<bson::Document>(collection);
        let mut find = collection.find(to_bson_filter(filter)?);
        if let Some(limit) = limit {
            find = find.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let documents: Vec<bson::Document> = find.await?.try_collect().await?;
        Ok(documents.into_iter().map(from_bson_document).collect())
    }

    fn backend_name(&self) -> &'static str {
        "mongodb"
    }
}

/// Builds an equality query document from a filter.
fn to_bson_filter(filter: &DocumentFilter) -> StoreResult<bson::Document> {
    let mut query = bson::Document::new();
    for (field, value) in filter.conditions() {
        let value = bson::to_bson(value).map_err(|e| StoreError::Persistence(e.to_string()))?;
        query.insert(field, value);
    }
    Ok(query)
}

fn from_bson_document(mut document: bson::Document) -> StoredDocument {
    let id = document.remove(ID_FIELD).map(id_from_bson);
    let fields = match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(fields) => fields,
        _ => Document::new(),
    };
    StoredDocument { id, fields }
}

fn id_from_bson(value: Bson) -> DocumentId {
    match value {
        Bson::ObjectId(oid) => DocumentId::from(oid),
        Bson::String(token) => DocumentId::native(token),
        other => DocumentId::native(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};

    #[test]
    fn test_object_id_split_from_body() {
        let oid = ObjectId::new();
        let stored = from_bson_document(doc! {
            "_id": oid,
            "name": "Alice",
            "rating": 5,
        });

        assert_eq!(stored.id, Some(DocumentId::from(oid)));
        assert!(!stored.fields.contains_key("_id"));
        assert_eq!(stored.fields["name"], "Alice");
        assert_eq!(stored.fields["rating"], 5);
    }

    #[test]
    fn test_document_without_id() {
        let stored = from_bson_document(doc! { "name": "Bob" });
        assert!(stored.id.is_none());
        assert_eq!(stored.fields.len(), 1);
    }

    #[test]
    fn test_string_id_kept_verbatim() {
        let id = id_from_bson(Bson::String("seed-1".into()));
        assert_eq!(id.to_string(), "seed-1");
    }

    #[test]
    fn test_filter_conversion() {
        let filter = DocumentFilter::new()
            .eq("category", "land")
            .eq("featured", true);
        let query = to_bson_filter(&filter).unwrap();
        assert_eq!(query.get_str("category").unwrap(), "land");
        assert!(query.get_bool("featured").unwrap());
    }

    #[test]
    fn test_empty_filter_is_empty_query() {
        let query = to_bson_filter(&DocumentFilter::new()).unwrap();
        assert!(query.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_unavailable() {
        let store = MongoStore::connect(
            "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=300",
            "real_estate",
        )
        .await
        .unwrap();

        let err = store
            .create_document("review", Document::new())
            .await
            .unwrap_err();
        assert!(err.is_unavailable());
        assert_eq!(err.code(), "ESTATE_STORE_UNAVAILABLE");

        let err = store
            .get_documents("property", &DocumentFilter::new(), None)
            .await
            .unwrap_err();
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn test_disconnected_store_is_unavailable() {
        let store = MongoStore::disconnected();
        assert!(store.database_name().is_none());

        let err = store
            .create_document("review", Document::new())
            .await
            .unwrap_err();
        assert!(err.is_unavailable());

        let err = store
            .get_documents("review", &DocumentFilter::new(), Some(20))
            .await
            .unwrap_err();
        assert!(err.is_unavailable());
    }
}
