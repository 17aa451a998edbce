//! Document store boundary for the OpenSearch test bed.
//!
//! Everything that touches the database lives here: the record models that
//! get written, the index specifications, and the [`DocumentStore`] trait with
//! its two implementations, [`MongoStore`] for a live server and
//! [`MemoryStore`] for tests.

pub mod errors;
pub mod index;
pub mod memory;
pub mod models;
pub mod mongo;
pub mod store;

pub use errors::StoreError;
pub use index::{IndexKind, IndexSpec};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::DocumentStore;

/// Re-exported so callers can build filters without depending on `bson` directly.
pub use bson::{Document, doc};
