//! Index plan for the seeded collections.
//!
//! - `customers`: `{ customer_id: 1 }`, `{ risk_level: 1 }`,
//!   `{ "location.coordinates": "2dsphere" }`
//! - `transactions`: `{ transaction_id: 1 }`, `{ customer_id: 1 }`,
//!   `{ timestamp: 1 }`, `{ is_suspicious: 1 }`,
//!   `{ "location.coordinates": "2dsphere" }`
//! - `system_logs`: `{ timestamp: 1 }`, `{ level: 1 }`, `{ service: 1 }`

use docstore::IndexSpec;

use crate::fixtures::{CUSTOMERS, SYSTEM_LOGS, TRANSACTIONS};

/// Indexes to create on one collection.
#[derive(Debug, Clone)]
pub struct CollectionIndexes {
    pub collection: &'static str,
    pub indexes: Vec<IndexSpec>,
}

pub fn index_plan() -> Vec<CollectionIndexes> {
    vec![
        CollectionIndexes {
            collection: CUSTOMERS,
            indexes: vec![
                IndexSpec::ascending("customer_id"),
                IndexSpec::ascending("risk_level"),
                IndexSpec::geo("location.coordinates"),
            ],
        },
        CollectionIndexes {
            collection: TRANSACTIONS,
            indexes: vec![
                IndexSpec::ascending("transaction_id"),
                IndexSpec::ascending("customer_id"),
                IndexSpec::ascending("timestamp"),
                IndexSpec::ascending("is_suspicious"),
                IndexSpec::geo("location.coordinates"),
            ],
        },
        CollectionIndexes {
            collection: SYSTEM_LOGS,
            indexes: vec![
                IndexSpec::ascending("timestamp"),
                IndexSpec::ascending("level"),
                IndexSpec::ascending("service"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstore::IndexKind;

    #[test]
    fn test_plan_covers_every_collection() {
        let plan = index_plan();
        let total: usize = plan.iter().map(|c| c.indexes.len()).sum();
        assert_eq!(total, 11);

        let names: Vec<String> = plan[1].indexes.iter().map(IndexSpec::name).collect();
        assert_eq!(
            names,
            vec![
                "transaction_id_1",
                "customer_id_1",
                "timestamp_1",
                "is_suspicious_1",
                "location.coordinates_2dsphere",
            ]
        );
    }

    #[test]
    fn test_geo_indexes_only_on_located_collections() {
        for entry in index_plan() {
            let has_geo = entry
                .indexes
                .iter()
                .any(|s| s.kind == IndexKind::Geo2dSphere);
            assert_eq!(has_geo, entry.collection != SYSTEM_LOGS);
        }
    }
}
