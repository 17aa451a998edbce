//! Human-readable results of a seeding run.

use std::fmt;

use serde::Serialize;

/// Document counts per collection after seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub database: String,
    pub counts: Vec<(String, u64)>,
}

impl SeedSummary {
    pub fn count(&self, collection: &str) -> Option<u64> {
        self.counts
            .iter()
            .find(|(name, _)| name == collection)
            .map(|(_, n)| *n)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

/// Completion banner printed to stdout once seeding is done.
impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MongoDB 초기 데이터 생성 완료!")?;
        write!(f, "생성된 컬렉션:")?;
        for (collection, count) in &self.counts {
            write!(f, "\n- {collection}: {count}개 문서")?;
        }
        Ok(())
    }
}

/// Results of the post-seed smoke queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmokeReport {
    pub high_risk_customers: u64,
    pub suspicious_transactions: u64,
    pub error_logs: u64,
    pub seoul_customers: u64,
}

impl fmt::Display for SmokeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "고위험 고객: {}명", self.high_risk_customers)?;
        writeln!(f, "의심스러운 거래: {}건", self.suspicious_transactions)?;
        writeln!(f, "에러 로그: {}건", self.error_logs)?;
        write!(f, "서울 지역 고객: {}명", self.seoul_customers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> SeedSummary {
        SeedSummary {
            database: "opensearch_test".to_string(),
            counts: vec![
                ("customers".to_string(), 5),
                ("transactions".to_string(), 5),
                ("system_logs".to_string(), 5),
            ],
        }
    }

    #[test]
    fn test_banner_format() {
        let expected = "MongoDB 초기 데이터 생성 완료!\n\
                        생성된 컬렉션:\n\
                        - customers: 5개 문서\n\
                        - transactions: 5개 문서\n\
                        - system_logs: 5개 문서";
        assert_eq!(summary().to_string(), expected);
    }

    #[test]
    fn test_lookup_and_total() {
        let summary = summary();
        assert_eq!(summary.count("transactions"), Some(5));
        assert_eq!(summary.count("accounts"), None);
        assert_eq!(summary.total(), 15);
    }
}
