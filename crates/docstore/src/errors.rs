use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] bson::ser::Error),

    #[error("Collection already exists: {0}")]
    CollectionExists(String),

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Unsupported filter operator: {0}")]
    UnsupportedFilter(String),

    #[error("Can't extract geo keys from {collection}.{field}: {reason}")]
    GeoKeys {
        collection: String,
        field: String,
        reason: String,
    },
}
