//! Customer fixtures: five Seoul residents across all three risk levels.

use docstore::models::{Customer, GeoLocation, RiskLevel};
use time::macros::datetime;

fn categories(names: [&str; 3]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// The fixed customer batch.
pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            customer_id: "CUST001".to_string(),
            name: "김철수".to_string(),
            age: 35,
            income: 65_000_000,
            credit_score: 720,
            risk_level: RiskLevel::Low,
            registration_date: datetime!(2020-03-15 0:00 UTC),
            last_transaction: datetime!(2025-08-10 0:00 UTC),
            total_transactions: 156,
            avg_transaction_amount: 125_000,
            preferred_categories: categories(["온라인쇼핑", "음식점", "교통"]),
            location: GeoLocation::new("서울", "강남구", 127.0276, 37.4979),
        },
        Customer {
            customer_id: "CUST002".to_string(),
            name: "이영희".to_string(),
            age: 28,
            income: 45_000_000,
            credit_score: 680,
            risk_level: RiskLevel::Medium,
            registration_date: datetime!(2021-07-22 0:00 UTC),
            last_transaction: datetime!(2025-08-11 0:00 UTC),
            total_transactions: 89,
            avg_transaction_amount: 85_000,
            preferred_categories: categories(["온라인쇼핑", "뷰티", "카페"]),
            location: GeoLocation::new("서울", "서초구", 127.0324, 37.4837),
        },
        Customer {
            customer_id: "CUST003".to_string(),
            name: "박민수".to_string(),
            age: 42,
            income: 85_000_000,
            credit_score: 780,
            risk_level: RiskLevel::Low,
            registration_date: datetime!(2019-11-08 0:00 UTC),
            last_transaction: datetime!(2025-08-12 0:00 UTC),
            total_transactions: 234,
            avg_transaction_amount: 180_000,
            preferred_categories: categories(["주유소", "음식점", "온라인쇼핑"]),
            location: GeoLocation::new("서울", "송파구", 127.1059, 37.5145),
        },
        Customer {
            customer_id: "CUST004".to_string(),
            name: "정호영".to_string(),
            age: 31,
            income: 38_000_000,
            credit_score: 620,
            risk_level: RiskLevel::High,
            registration_date: datetime!(2022-01-30 0:00 UTC),
            last_transaction: datetime!(2025-08-09 0:00 UTC),
            total_transactions: 67,
            avg_transaction_amount: 95_000,
            preferred_categories: categories(["온라인쇼핑", "게임", "음식점"]),
            location: GeoLocation::new("서울", "마포구", 126.9087, 37.5636),
        },
        Customer {
            customer_id: "CUST005".to_string(),
            name: "최수진".to_string(),
            age: 39,
            income: 72_000_000,
            credit_score: 750,
            risk_level: RiskLevel::Low,
            registration_date: datetime!(2020-09-12 0:00 UTC),
            last_transaction: datetime!(2025-08-12 0:00 UTC),
            total_transactions: 198,
            avg_transaction_amount: 145_000,
            preferred_categories: categories(["뷰티", "음식점", "온라인쇼핑"]),
            location: GeoLocation::new("서울", "종로구", 126.9780, 37.5735),
        },
    ]
}
