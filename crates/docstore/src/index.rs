//! Single-field index specifications.
//!
//! Indexes here are advisory performance aids (exact match, range/sort and
//! geo-spatial lookups), never uniqueness constraints.

use bson::{Bson, Document};
use mongodb::IndexModel;
use mongodb::options::IndexOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// `{ field: 1 }`
    Ascending,
    /// `{ field: "2dsphere" }` over `[lon, lat]` pairs.
    Geo2dSphere,
}

impl IndexKind {
    fn key_value(&self) -> Bson {
        match self {
            IndexKind::Ascending => Bson::Int32(1),
            IndexKind::Geo2dSphere => Bson::String("2dsphere".to_string()),
        }
    }

    fn name_suffix(&self) -> &'static str {
        match self {
            IndexKind::Ascending => "1",
            IndexKind::Geo2dSphere => "2dsphere",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    /// Dotted field path, e.g. `location.coordinates`.
    pub field: String,
    pub kind: IndexKind,
}

impl IndexSpec {
    pub fn ascending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: IndexKind::Ascending,
        }
    }

    pub fn geo(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: IndexKind::Geo2dSphere,
        }
    }

    pub fn keys(&self) -> Document {
        let mut keys = Document::new();
        keys.insert(self.field.clone(), self.kind.key_value());
        keys
    }

    /// The name the server assigns when none is given (`<field>_<value>`).
    pub fn name(&self) -> String {
        format!("{}_{}", self.field, self.kind.name_suffix())
    }

    pub fn to_model(&self) -> IndexModel {
        IndexModel::builder()
            .keys(self.keys())
            .options(IndexOptions::builder().name(self.name()).build())
            .build()
    }
}
