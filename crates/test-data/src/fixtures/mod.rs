//! Fixed sample records for the test bed.
//!
//! Every value is hard-coded; nothing here is generated. The payload covers
//! three collections:
//! - [`customers()`]: customer profiles with home locations
//! - [`transactions()`]: card payments, one of them suspicious
//! - [`system_logs()`]: service log lines with resource metrics

pub mod customers;
pub mod system_logs;
pub mod transactions;

pub use customers::customers;
pub use system_logs::system_logs;
pub use transactions::transactions;

use std::collections::BTreeMap;

use bson::Document;
use docstore::StoreError;
use docstore::models::{Customer, SystemLogEntry, Transaction, to_document};
use geo::{Distance as _, Haversine};
use serde::Serialize;

pub const CUSTOMERS: &str = "customers";
pub const TRANSACTIONS: &str = "transactions";
pub const SYSTEM_LOGS: &str = "system_logs";

/// Collection names in seeding order.
pub const COLLECTIONS: [&str; 3] = [CUSTOMERS, TRANSACTIONS, SYSTEM_LOGS];

/// Serializes a batch of records into store documents.
pub fn to_documents<T: Serialize>(records: &[T]) -> Result<Vec<Document>, StoreError> {
    records.iter().map(to_document).collect()
}

/// Per-category spend across the transaction batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total_amount: i64,
    pub count: usize,
}

/// The complete payload for one seeding run.
#[derive(Debug, Clone, Serialize)]
pub struct FixtureSet {
    pub customers: Vec<Customer>,
    pub transactions: Vec<Transaction>,
    pub system_logs: Vec<SystemLogEntry>,
}

impl FixtureSet {
    /// The standard test bed payload: five records per collection.
    pub fn standard() -> Self {
        Self {
            customers: customers(),
            transactions: transactions(),
            system_logs: system_logs(),
        }
    }

    pub fn customer(&self, customer_id: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|c| c.customer_id == customer_id)
    }

    /// Each collection paired with its serialized batch, in seeding order.
    pub fn documents(&self) -> Result<Vec<(&'static str, Vec<Document>)>, StoreError> {
        Ok(vec![
            (CUSTOMERS, to_documents(&self.customers)?),
            (TRANSACTIONS, to_documents(&self.transactions)?),
            (SYSTEM_LOGS, to_documents(&self.system_logs)?),
        ])
    }

    /// Total amount and count per category, largest total first.
    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        let mut by_category: BTreeMap<&str, (i64, usize)> = BTreeMap::new();
        for txn in &self.transactions {
            let entry = by_category.entry(txn.category.as_str()).or_default();
            entry.0 += i64::from(txn.amount);
            entry.1 += 1;
        }

        let mut totals: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, (total_amount, count))| CategoryTotal {
                category: category.to_string(),
                total_amount,
                count,
            })
            .collect();

        // Stable sort keeps category order for equal totals
        totals.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));
        totals
    }

    /// Great-circle distance in meters between where a transaction happened
    /// and its customer's home location. `None` if the customer is unknown.
    pub fn distance_from_home(&self, txn: &Transaction) -> Option<f64> {
        let customer = self.customer(&txn.customer_id)?;
        Some(Haversine.distance(customer.location.point(), txn.location.point()))
    }
}

impl Default for FixtureSet {
    fn default() -> Self {
        Self::standard()
    }
}
