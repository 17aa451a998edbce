//! Integrity checks on a fixture payload, run before anything is written.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::fixtures::FixtureSet;

/// A single problem found in a payload.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureIssue {
    DuplicateId { collection: &'static str, id: String },
    UnknownCustomer { transaction_id: String, customer_id: String },
    RiskScoreOutOfRange { transaction_id: String, risk_score: f64 },
    InvalidCoordinates { record_id: String, coordinates: [f64; 2] },
}

impl fmt::Display for FixtureIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureIssue::DuplicateId { collection, id } => {
                write!(f, "duplicate id {id} in {collection}")
            }
            FixtureIssue::UnknownCustomer {
                transaction_id,
                customer_id,
            } => write!(f, "{transaction_id} references unknown customer {customer_id}"),
            FixtureIssue::RiskScoreOutOfRange {
                transaction_id,
                risk_score,
            } => write!(f, "{transaction_id} has risk_score {risk_score} outside [0, 1]"),
            FixtureIssue::InvalidCoordinates {
                record_id,
                coordinates,
            } => write!(
                f,
                "{record_id} has coordinates {coordinates:?}, expected [lon, lat]"
            ),
        }
    }
}

#[derive(Debug, Error)]
#[error("fixture payload has {} issue(s): {}", .0.len(), join_issues(.0))]
pub struct ValidationError(pub Vec<FixtureIssue>);

fn join_issues(issues: &[FixtureIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn duplicates<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
    issues: &mut Vec<FixtureIssue>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(FixtureIssue::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
}

/// Collects every issue in the payload rather than stopping at the first.
pub fn validate(fixtures: &FixtureSet) -> Result<(), ValidationError> {
    let mut issues = Vec::new();

    duplicates(
        crate::fixtures::CUSTOMERS,
        fixtures.customers.iter().map(|c| c.customer_id.as_str()),
        &mut issues,
    );
    duplicates(
        crate::fixtures::TRANSACTIONS,
        fixtures.transactions.iter().map(|t| t.transaction_id.as_str()),
        &mut issues,
    );
    duplicates(
        crate::fixtures::SYSTEM_LOGS,
        fixtures.system_logs.iter().map(|l| l.log_id.as_str()),
        &mut issues,
    );

    for customer in &fixtures.customers {
        if !customer.location.has_valid_coordinates() {
            issues.push(FixtureIssue::InvalidCoordinates {
                record_id: customer.customer_id.clone(),
                coordinates: customer.location.coordinates,
            });
        }
    }

    for txn in &fixtures.transactions {
        if fixtures.customer(&txn.customer_id).is_none() {
            issues.push(FixtureIssue::UnknownCustomer {
                transaction_id: txn.transaction_id.clone(),
                customer_id: txn.customer_id.clone(),
            });
        }
        if !(0.0..=1.0).contains(&txn.risk_score) {
            issues.push(FixtureIssue::RiskScoreOutOfRange {
                transaction_id: txn.transaction_id.clone(),
                risk_score: txn.risk_score,
            });
        }
        if !txn.location.has_valid_coordinates() {
            issues.push(FixtureIssue::InvalidCoordinates {
                record_id: txn.transaction_id.clone(),
                coordinates: txn.location.coordinates,
            });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError(issues))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_payload_is_valid() {
        validate(&FixtureSet::standard()).unwrap();
    }

    #[test]
    fn test_reports_every_issue() {
        let mut fixtures = FixtureSet::standard();
        fixtures.transactions[0].customer_id = "CUST999".to_string();
        fixtures.transactions[1].risk_score = 1.5;
        fixtures.customers[2].location.coordinates = [37.5145, 227.1059];
        fixtures.system_logs[4].log_id = "LOG001".to_string();

        let err = validate(&fixtures).unwrap_err();
        assert_eq!(err.0.len(), 4);
        assert!(err.0.contains(&FixtureIssue::UnknownCustomer {
            transaction_id: "TXN001".to_string(),
            customer_id: "CUST999".to_string(),
        }));
        assert!(err.0.contains(&FixtureIssue::DuplicateId {
            collection: "system_logs",
            id: "LOG001".to_string(),
        }));
        assert!(err.to_string().starts_with("fixture payload has 4 issue(s)"));
    }

    #[test]
    fn test_nan_risk_score_is_out_of_range() {
        let mut fixtures = FixtureSet::standard();
        fixtures.transactions[3].risk_score = f64::NAN;

        let err = validate(&fixtures).unwrap_err();
        assert!(matches!(
            &err.0[..],
            [FixtureIssue::RiskScoreOutOfRange { transaction_id, .. }] if transaction_id == "TXN004"
        ));
    }
}
