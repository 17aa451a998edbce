//! In-process [`DocumentStore`] with the same observable contract as the
//! MongoDB store, for tests and dry runs.

use std::collections::BTreeMap;

use async_trait::async_trait;
use bson::{Bson, Document, oid::ObjectId};
use tokio::sync::Mutex;

use crate::{
    errors::StoreError,
    index::{IndexKind, IndexSpec},
    models::is_valid_lon_lat,
    store::DocumentStore,
};

const ID_INDEX: &str = "_id_";

#[derive(Debug, Default)]
struct MemCollection {
    docs: Vec<Document>,
    indexes: Vec<IndexSpec>,
}

impl MemCollection {
    fn check_geo_keys(&self, collection: &str, docs: &[Document]) -> Result<(), StoreError> {
        for spec in self.indexes.iter().filter(|s| s.kind == IndexKind::Geo2dSphere) {
            for doc in docs {
                check_geo_value(collection, &spec.field, lookup_path(doc, &spec.field))?;
            }
        }
        Ok(())
    }
}

/// Memory-backed store bound to one logical database.
///
/// Unlike the server, a batch insert is validated as a whole before any of
/// it is written, so a rejected batch leaves the collection untouched.
#[derive(Debug)]
pub struct MemoryStore {
    database: String,
    collections: Mutex<BTreeMap<String, MemCollection>>,
}

impl MemoryStore {
    pub fn new(database: &str) -> Self {
        Self {
            database: database.to_string(),
            collections: Mutex::new(BTreeMap::new()),
        }
    }

    /// Snapshot of a collection's documents, in insertion order.
    pub async fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .await
            .get(collection)
            .map(|c| c.docs.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn database_name(&self) -> &str {
        &self.database
    }

    async fn create_collection(&self, name: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().await;
        if collections.contains_key(name) {
            return Err(StoreError::CollectionExists(name.to_string()));
        }
        collections.insert(name.to_string(), MemCollection::default());
        Ok(())
    }

    async fn drop_collection(&self, name: &str) -> Result<(), StoreError> {
        self.collections.lock().await.remove(name);
        Ok(())
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        // BTreeMap keys are already sorted
        Ok(self.collections.lock().await.keys().cloned().collect())
    }

    async fn insert_many(
        &self,
        collection: &str,
        mut docs: Vec<Document>,
    ) -> Result<usize, StoreError> {
        let mut collections = self.collections.lock().await;
        let target = collections.entry(collection.to_string()).or_default();

        target.check_geo_keys(collection, &docs)?;

        for doc in &mut docs {
            if !doc.contains_key("_id") {
                doc.insert("_id", ObjectId::new());
            }
        }

        let inserted = docs.len();
        target.docs.extend(docs);
        Ok(inserted)
    }

    async fn create_index(
        &self,
        collection: &str,
        spec: &IndexSpec,
    ) -> Result<String, StoreError> {
        let mut collections = self.collections.lock().await;
        let target = collections.entry(collection.to_string()).or_default();

        if !target.indexes.contains(spec) {
            if spec.kind == IndexKind::Geo2dSphere {
                for doc in &target.docs {
                    check_geo_value(collection, &spec.field, lookup_path(doc, &spec.field))?;
                }
            }
            target.indexes.push(spec.clone());
        }

        Ok(spec.name())
    }

    async fn list_indexes(&self, collection: &str) -> Result<Vec<String>, StoreError> {
        let collections = self.collections.lock().await;
        let target = collections
            .get(collection)
            .ok_or_else(|| StoreError::CollectionNotFound(collection.to_string()))?;

        let mut names = vec![ID_INDEX.to_string()];
        names.extend(target.indexes.iter().map(IndexSpec::name));
        Ok(names)
    }

    async fn count_documents(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<u64, StoreError> {
        if let Some(key) = filter.keys().find(|k| k.starts_with('$')) {
            return Err(StoreError::UnsupportedFilter(key.clone()));
        }

        let collections = self.collections.lock().await;
        let Some(target) = collections.get(collection) else {
            return Ok(0);
        };

        let count = target
            .docs
            .iter()
            .filter(|doc| matches_filter(doc, &filter))
            .count();
        Ok(count as u64)
    }
}

/// Resolves a dotted path such as `location.coordinates` through nested documents.
fn lookup_path<'a>(doc: &'a Document, path: &str) -> Option<&'a Bson> {
    let mut segments = path.split('.');
    let mut current = doc.get(segments.next()?)?;

    for segment in segments {
        current = match current {
            Bson::Document(inner) => inner.get(segment)?,
            _ => return None,
        };
    }

    Some(current)
}

fn as_f64(value: &Bson) -> Option<f64> {
    match value {
        Bson::Double(v) => Some(*v),
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        _ => None,
    }
}

/// Equality the way the server compares values: numbers across BSON types,
/// everything else structurally.
fn values_equal(a: &Bson, b: &Bson) -> bool {
    match (as_f64(a), as_f64(b)) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

fn matches_filter(doc: &Document, filter: &Document) -> bool {
    filter.iter().all(|(path, expected)| match lookup_path(doc, path) {
        // A scalar condition on an array field matches any element
        Some(Bson::Array(items)) if !matches!(expected, Bson::Array(_)) => {
            items.iter().any(|item| values_equal(item, expected))
        }
        Some(actual) => values_equal(actual, expected),
        None => matches!(expected, Bson::Null),
    })
}

/// A `2dsphere` index accepts a missing field or a legacy `[lon, lat]` pair.
fn check_geo_value(
    collection: &str,
    field: &str,
    value: Option<&Bson>,
) -> Result<(), StoreError> {
    let geo_error = |reason: String| StoreError::GeoKeys {
        collection: collection.to_string(),
        field: field.to_string(),
        reason,
    };

    let Some(value) = value else {
        return Ok(());
    };

    let Bson::Array(pair) = value else {
        return Err(geo_error(format!("expected a coordinate pair, found {value}")));
    };

    match pair.iter().map(as_f64).collect::<Option<Vec<f64>>>().as_deref() {
        Some([lon, lat]) if is_valid_lon_lat(*lon, *lat) => Ok(()),
        Some([lon, lat]) => Err(geo_error(format!(
            "longitude/latitude is out of bounds, lng: {lon} lat: {lat}"
        ))),
        _ => Err(geo_error(format!(
            "expected two numbers, found {}",
            Bson::Array(pair.clone())
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    fn located(id: &str, lon: f64, lat: f64) -> Document {
        doc! {
            "id": id,
            "location": { "city": "서울", "coordinates": [lon, lat] },
            "tags": ["a", "b"],
        }
    }

    #[tokio::test]
    async fn test_create_collection_twice_fails() {
        let store = MemoryStore::new("test");
        store.create_collection("things").await.unwrap();

        let err = store.create_collection("things").await.unwrap_err();
        assert!(matches!(err, StoreError::CollectionExists(name) if name == "things"));
    }

    #[tokio::test]
    async fn test_insert_assigns_ids_and_creates_collection() {
        let store = MemoryStore::new("test");
        let inserted = store
            .insert_many("things", vec![doc! { "n": 1 }, doc! { "_id": 7, "n": 2 }])
            .await
            .unwrap();

        assert_eq!(inserted, 2);
        assert_eq!(store.list_collections().await.unwrap(), vec!["things"]);

        let docs = store.documents("things").await;
        assert!(matches!(docs[0].get("_id"), Some(Bson::ObjectId(_))));
        assert_eq!(docs[1].get_i32("_id").unwrap(), 7);
    }

    #[tokio::test]
    async fn test_count_with_filters() {
        let store = MemoryStore::new("test");
        store
            .insert_many(
                "things",
                vec![
                    located("x", 127.0, 37.5),
                    located("y", 126.9, 37.6),
                    doc! { "id": "z", "score": 3_i64 },
                ],
            )
            .await
            .unwrap();

        let cases = [
            (doc! {}, 3),
            (doc! { "id": "x" }, 1),
            (doc! { "location.city": "서울" }, 2),
            (doc! { "tags": "b" }, 2),
            (doc! { "score": 3 }, 1),
            (doc! { "score": Bson::Null }, 2),
        ];
        for (filter, expected) in cases {
            let count = store.count_documents("things", filter.clone()).await.unwrap();
            assert_eq!(count, expected, "filter {filter}");
        }
        assert_eq!(store.count_documents("missing", doc! {}).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_operator_filters_are_rejected() {
        let store = MemoryStore::new("test");
        let err = store
            .count_documents("things", doc! { "$or": [] })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UnsupportedFilter(op) if op == "$or"));
    }

    #[tokio::test]
    async fn test_indexes_are_idempotent() {
        let store = MemoryStore::new("test");
        store.create_collection("things").await.unwrap();

        let spec = IndexSpec::ascending("id");
        assert_eq!(store.create_index("things", &spec).await.unwrap(), "id_1");
        assert_eq!(store.create_index("things", &spec).await.unwrap(), "id_1");

        assert_eq!(
            store.list_indexes("things").await.unwrap(),
            vec!["_id_".to_string(), "id_1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_list_indexes_on_missing_collection() {
        let store = MemoryStore::new("test");
        let err = store.list_indexes("nope").await.unwrap_err();
        assert!(matches!(err, StoreError::CollectionNotFound(_)));
    }

    #[tokio::test]
    async fn test_geo_index_rejects_bad_coordinates() {
        let store = MemoryStore::new("test");
        store
            .insert_many("things", vec![located("x", 200.0, 37.5)])
            .await
            .unwrap();

        let err = store
            .create_index("things", &IndexSpec::geo("location.coordinates"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::GeoKeys { .. }));
    }

    #[tokio::test]
    async fn test_geo_index_guards_later_inserts() {
        let store = MemoryStore::new("test");
        store
            .create_index("things", &IndexSpec::geo("location.coordinates"))
            .await
            .unwrap();

        // Zero coordinates and a missing field are both fine
        store
            .insert_many("things", vec![located("x", 0.0, 0.0), doc! { "id": "y" }])
            .await
            .unwrap();

        let err = store
            .insert_many(
                "things",
                vec![doc! { "location": { "coordinates": ["east", 1.0] } }],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::GeoKeys { .. }));
        assert_eq!(store.count_documents("things", doc! {}).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_drop_collection() {
        let store = MemoryStore::new("test");
        store.create_collection("things").await.unwrap();
        store.drop_collection("things").await.unwrap();
        store.drop_collection("things").await.unwrap();

        assert!(store.list_collections().await.unwrap().is_empty());
    }
}
