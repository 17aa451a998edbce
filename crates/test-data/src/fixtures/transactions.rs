//! Transaction fixtures: one card payment per customer, with `TXN004` as the
//! single suspicious overseas purchase.

use docstore::models::{GeoLocation, Transaction};
use time::OffsetDateTime;
use time::macros::datetime;

#[allow(clippy::too_many_arguments)]
fn card_payment(
    transaction_id: &str,
    customer_id: &str,
    amount: i32,
    category: &str,
    merchant: &str,
    timestamp: OffsetDateTime,
    location: GeoLocation,
    risk_score: f64,
    is_suspicious: bool,
    card_type: &str,
) -> Transaction {
    Transaction {
        transaction_id: transaction_id.to_string(),
        customer_id: customer_id.to_string(),
        amount,
        category: category.to_string(),
        merchant: merchant.to_string(),
        timestamp,
        location,
        risk_score,
        is_suspicious,
        payment_method: "신용카드".to_string(),
        card_type: card_type.to_string(),
    }
}

/// The fixed transaction batch.
pub fn transactions() -> Vec<Transaction> {
    vec![
        card_payment(
            "TXN001",
            "CUST001",
            150_000,
            "온라인쇼핑",
            "쿠팡",
            datetime!(2025-08-12 10:30 UTC),
            GeoLocation::new("서울", "강남구", 127.0276, 37.4979),
            0.15,
            false,
            "VISA",
        ),
        card_payment(
            "TXN002",
            "CUST002",
            85_000,
            "음식점",
            "스타벅스 강남점",
            datetime!(2025-08-12 12:15 UTC),
            GeoLocation::new("서울", "강남구", 127.0280, 37.4980),
            0.08,
            false,
            "MASTER",
        ),
        card_payment(
            "TXN003",
            "CUST003",
            250_000,
            "주유소",
            "SK에너지",
            datetime!(2025-08-12 14:45 UTC),
            GeoLocation::new("서울", "송파구", 127.1060, 37.5146),
            0.12,
            false,
            "VISA",
        ),
        card_payment(
            "TXN004",
            "CUST004",
            500_000,
            "온라인쇼핑",
            "알 수 없는 판매자",
            datetime!(2025-08-12 2:30 UTC),
            GeoLocation::new("해외", "알 수 없음", 0.0, 0.0),
            0.85,
            true,
            "MASTER",
        ),
        card_payment(
            "TXN005",
            "CUST005",
            120_000,
            "뷰티",
            "올리브영",
            datetime!(2025-08-12 16:20 UTC),
            GeoLocation::new("서울", "종로구", 126.9781, 37.5736),
            0.10,
            false,
            "VISA",
        ),
    ]
}
