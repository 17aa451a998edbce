//! MongoDB-backed [`DocumentStore`].

use async_trait::async_trait;
use bson::{Document, doc};
use mongodb::{Client, Database, error::ErrorKind};
use tracing::debug;

use crate::{errors::StoreError, index::IndexSpec, store::DocumentStore};

/// Server error code for `NamespaceExists`.
const NAMESPACE_EXISTS: i32 = 48;
/// Server error code for `NamespaceNotFound`.
const NAMESPACE_NOT_FOUND: i32 = 26;

fn has_code(err: &mongodb::error::Error, code: i32) -> bool {
    matches!(err.kind.as_ref(), ErrorKind::Command(cmd) if cmd.code == code)
}

#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    /// Connects to `uri` and selects `database`. The database itself is
    /// created lazily by the server on first write.
    ///
    /// The client connects lazily, so a `ping` is sent before returning to
    /// surface an unreachable server here instead of on the first write.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 }).await?;
        debug!("Ping to database {} succeeded", database);
        Ok(Self { client, db })
    }

    /// Returns the underlying client for advanced usage.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn database_name(&self) -> &str {
        self.db.name()
    }

    async fn create_collection(&self, name: &str) -> Result<(), StoreError> {
        match self.db.create_collection(name).await {
            Ok(()) => Ok(()),
            Err(e) if has_code(&e, NAMESPACE_EXISTS) => {
                Err(StoreError::CollectionExists(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn drop_collection(&self, name: &str) -> Result<(), StoreError> {
        match self.db.collection::<Document>(name).drop().await {
            Ok(()) => Ok(()),
            Err(e) if has_code(&e, NAMESPACE_NOT_FOUND) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let mut names = self.db.list_collection_names().await?;
        names.sort();
        Ok(names)
    }

    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> Result<usize, StoreError> {
        // The driver rejects an empty batch outright.
        if docs.is_empty() {
            return Ok(0);
        }

        let result = self
            .db
            .collection::<Document>(collection)
            .insert_many(docs)
            .await?;

        debug!(
            "Inserted {} documents into {}",
            result.inserted_ids.len(),
            collection
        );
        Ok(result.inserted_ids.len())
    }

    async fn create_index(
        &self,
        collection: &str,
        spec: &IndexSpec,
    ) -> Result<String, StoreError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .create_index(spec.to_model())
            .await?;

        Ok(result.index_name)
    }

    async fn list_indexes(&self, collection: &str) -> Result<Vec<String>, StoreError> {
        match self
            .db
            .collection::<Document>(collection)
            .list_index_names()
            .await
        {
            Ok(names) => Ok(names),
            Err(e) if has_code(&e, NAMESPACE_NOT_FOUND) => {
                Err(StoreError::CollectionNotFound(collection.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn count_documents(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<u64, StoreError> {
        let count = self
            .db
            .collection::<Document>(collection)
            .count_documents(filter)
            .await?;

        Ok(count)
    }
}
