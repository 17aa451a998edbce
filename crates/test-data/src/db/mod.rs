//! Database integration for seeding fixture data.
//!
//! The [`Seeder`] writes the fixture payload through any
//! [`docstore::DocumentStore`]: one collection at a time, one bulk insert per
//! collection, followed by the index plan.

mod seeder;

pub use seeder::{SeedError, Seeder};
