//! The storage seam the seeder writes through.

use async_trait::async_trait;
use bson::Document;

use crate::{errors::StoreError, index::IndexSpec};

/// Operations a document store has to offer for seeding a logical database.
///
/// A store is bound to one logical database when it is constructed; every
/// collection name passed in here is resolved within that database.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the selected logical database.
    fn database_name(&self) -> &str;

    /// Creates an empty collection. Fails with
    /// [`StoreError::CollectionExists`] if the collection is already there.
    async fn create_collection(&self, name: &str) -> Result<(), StoreError>;

    /// Drops a collection and its indexes. Dropping a missing collection is a no-op.
    async fn drop_collection(&self, name: &str) -> Result<(), StoreError>;

    /// Collection names, sorted.
    async fn list_collections(&self) -> Result<Vec<String>, StoreError>;

    /// Writes the whole batch in one bulk call and returns how many documents
    /// were inserted. Creates the collection if needed.
    async fn insert_many(&self, collection: &str, docs: Vec<Document>)
    -> Result<usize, StoreError>;

    /// Creates an index and returns its name. Creating an identical index
    /// again returns the existing name.
    async fn create_index(&self, collection: &str, spec: &IndexSpec)
    -> Result<String, StoreError>;

    /// Index names on the collection, including the implicit `_id_`.
    async fn list_indexes(&self, collection: &str) -> Result<Vec<String>, StoreError>;

    /// Counts documents matching `filter`. An empty filter counts everything.
    async fn count_documents(&self, collection: &str, filter: Document)
    -> Result<u64, StoreError>;
}
