//! Fixture data for the OpenSearch plugin test bed.
//!
//! This crate seeds a MongoDB database with fixed sample records (customers,
//! card transactions and system logs) plus the indexes the plugin tests query
//! through. Nothing is generated: the payload is the same on every run.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let store = MongoStore::connect("mongodb://localhost:27017/", "opensearch_test").await?;
//! let summary = Seeder::new(store)
//!     .with_drop_existing(true)
//!     .run(&FixtureSet::standard())
//!     .await?;
//! println!("{summary}");
//! ```

pub mod config;
pub mod db;
pub mod fixtures;
pub mod indexes;
pub mod report;
pub mod validate;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, Seeder};
    pub use crate::fixtures::{CUSTOMERS, FixtureSet, SYSTEM_LOGS, TRANSACTIONS};
    pub use crate::indexes::index_plan;
    pub use crate::report::{SeedSummary, SmokeReport};
    pub use crate::validate::validate;
    pub use docstore::{DocumentStore, MemoryStore, MongoStore};
}
