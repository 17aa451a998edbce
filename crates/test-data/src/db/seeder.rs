//! Database seeding utilities.

use docstore::models::{Customer, LogLevel, RiskLevel, SystemLogEntry, Transaction};
use docstore::{DocumentStore, StoreError, doc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::fixtures::{
    COLLECTIONS, CUSTOMERS, FixtureSet, SYSTEM_LOGS, TRANSACTIONS, to_documents,
};
use crate::indexes::{CollectionIndexes, index_plan};
use crate::report::{SeedSummary, SmokeReport};
use crate::validate::{ValidationError, validate};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Database seeder for writing the fixture payload into a document store.
///
/// Each collection is created explicitly and then filled with a single bulk
/// insert. Seeding is not idempotent: if any fixture collection already
/// exists, [`Seeder::run`] fails with [`StoreError::CollectionExists`] before
/// writing anything, unless the seeder was built with
/// [`Seeder::with_drop_existing`].
pub struct Seeder<S> {
    store: S,
    drop_existing: bool,
}

impl<S: DocumentStore> Seeder<S> {
    /// Creates a new seeder writing through the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            drop_existing: false,
        }
    }

    /// Drop the fixture collections before seeding.
    pub fn with_drop_existing(mut self, drop_existing: bool) -> Self {
        self.drop_existing = drop_existing;
        self
    }

    /// Validates and seeds the whole payload, creates the index plan and
    /// returns the resulting document counts.
    pub async fn run(&self, fixtures: &FixtureSet) -> Result<SeedSummary, SeedError> {
        validate(fixtures)?;

        if self.drop_existing {
            self.clear_all().await?;
        } else {
            self.ensure_absent().await?;
        }

        self.seed_customers(&fixtures.customers).await?;
        self.seed_transactions(&fixtures.transactions).await?;
        self.seed_system_logs(&fixtures.system_logs).await?;
        self.create_indexes(&index_plan()).await?;

        self.summary().await
    }

    /// Fails on the first fixture collection that is already present.
    async fn ensure_absent(&self) -> Result<(), SeedError> {
        let existing = self.store.list_collections().await?;
        if let Some(name) = COLLECTIONS
            .iter()
            .find(|name| existing.iter().any(|e| e == **name))
        {
            return Err(StoreError::CollectionExists(name.to_string()).into());
        }
        Ok(())
    }

    /// Seeds customers into the database.
    pub async fn seed_customers(&self, customers: &[Customer]) -> Result<usize, SeedError> {
        self.seed_collection(CUSTOMERS, customers).await
    }

    /// Seeds transactions into the database.
    pub async fn seed_transactions(
        &self,
        transactions: &[Transaction],
    ) -> Result<usize, SeedError> {
        self.seed_collection(TRANSACTIONS, transactions).await
    }

    /// Seeds system log entries into the database.
    pub async fn seed_system_logs(&self, logs: &[SystemLogEntry]) -> Result<usize, SeedError> {
        self.seed_collection(SYSTEM_LOGS, logs).await
    }

    /// Creates the collection, then writes the entire batch in one bulk call.
    async fn seed_collection<T: Serialize>(
        &self,
        collection: &str,
        records: &[T],
    ) -> Result<usize, SeedError> {
        info!("Seeding {} {}...", records.len(), collection);

        let docs = to_documents(records)?;
        self.store.create_collection(collection).await?;
        let inserted = self.store.insert_many(collection, docs).await?;

        info!("Seeded {} {}", inserted, collection);
        Ok(inserted)
    }

    /// Creates every index in the plan. Returns the number of indexes created.
    pub async fn create_indexes(&self, plan: &[CollectionIndexes]) -> Result<usize, SeedError> {
        let mut created = 0;

        for entry in plan {
            for spec in &entry.indexes {
                let name = self.store.create_index(entry.collection, spec).await?;
                info!("  Created index {}.{}", entry.collection, name);
                created += 1;
            }
        }

        info!("Created {} indexes", created);
        Ok(created)
    }

    /// Drops all fixture collections.
    ///
    /// **WARNING**: This deletes the collections together with any documents
    /// added to them outside of seeding.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        let existing = self.store.list_collections().await?;

        for name in COLLECTIONS {
            if existing.iter().any(|e| e == name) {
                warn!("Dropping existing collection {}", name);
                self.store.drop_collection(name).await?;
            }
        }

        Ok(())
    }

    /// Counts the documents in each fixture collection.
    pub async fn summary(&self) -> Result<SeedSummary, SeedError> {
        let mut counts = Vec::with_capacity(COLLECTIONS.len());
        for name in COLLECTIONS {
            let count = self.store.count_documents(name, doc! {}).await?;
            counts.push((name.to_string(), count));
        }

        Ok(SeedSummary {
            database: self.store.database_name().to_string(),
            counts,
        })
    }

    /// Runs the lookups the plugin tests depend on against the seeded data.
    pub async fn smoke_check(&self) -> Result<SmokeReport, SeedError> {
        let high_risk_customers = self
            .store
            .count_documents(CUSTOMERS, doc! { "risk_level": RiskLevel::High.as_str() })
            .await?;
        let suspicious_transactions = self
            .store
            .count_documents(TRANSACTIONS, doc! { "is_suspicious": true })
            .await?;
        let error_logs = self
            .store
            .count_documents(SYSTEM_LOGS, doc! { "level": LogLevel::Error.as_str() })
            .await?;
        let seoul_customers = self
            .store
            .count_documents(CUSTOMERS, doc! { "location.city": "서울" })
            .await?;

        Ok(SmokeReport {
            high_risk_customers,
            suspicious_transactions,
            error_logs,
            seoul_customers,
        })
    }

    /// Returns a reference to the store for advanced usage.
    pub fn store(&self) -> &S {
        &self.store
    }
}
