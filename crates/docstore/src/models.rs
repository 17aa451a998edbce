use bson::Document;
use bson::serde_helpers::time_0_3_offsetdatetime_as_bson_datetime as bson_datetime;
use geo::Point;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::errors::StoreError;

/// A named place with a `[longitude, latitude]` pair, stored in GeoJSON
/// legacy coordinate order so it can back a `2dsphere` index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub city: String,
    pub district: String,
    pub coordinates: [f64; 2],
}

impl GeoLocation {
    pub fn new(city: &str, district: &str, lon: f64, lat: f64) -> Self {
        Self {
            city: city.to_string(),
            district: district.to_string(),
            coordinates: [lon, lat],
        }
    }

    pub fn point(&self) -> Point<f64> {
        Point::new(self.coordinates[0], self.coordinates[1])
    }

    /// True when the pair is finite and within WGS84 bounds.
    pub fn has_valid_coordinates(&self) -> bool {
        is_valid_lon_lat(self.coordinates[0], self.coordinates[1])
    }
}

pub(crate) fn is_valid_lon_lat(lon: f64, lat: f64) -> bool {
    lon.is_finite()
        && lat.is_finite()
        && (-180.0..=180.0).contains(&lon)
        && (-90.0..=90.0).contains(&lat)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
    pub age: i32,
    /// Annual income in KRW.
    pub income: i32,
    pub credit_score: i32,
    pub risk_level: RiskLevel,
    #[serde(with = "bson_datetime")]
    pub registration_date: OffsetDateTime,
    #[serde(with = "bson_datetime")]
    pub last_transaction: OffsetDateTime,
    pub total_transactions: i32,
    pub avg_transaction_amount: i32,
    pub preferred_categories: Vec<String>,
    pub location: GeoLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    /// Informal reference to [`Customer::customer_id`]; the store does not enforce it.
    pub customer_id: String,
    /// Amount in KRW.
    pub amount: i32,
    pub category: String,
    pub merchant: String,
    #[serde(with = "bson_datetime")]
    pub timestamp: OffsetDateTime,
    pub location: GeoLocation,
    /// Fraud model output in `[0, 1]`.
    pub risk_score: f64,
    pub is_suspicious: bool,
    pub payment_method: String,
    pub card_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Resource and latency metrics attached to a log line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogDetails {
    pub cpu_usage: f64,
    pub memory_usage: f64,
    /// Milliseconds.
    pub response_time: i32,
    pub active_connections: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemLogEntry {
    pub log_id: String,
    #[serde(with = "bson_datetime")]
    pub timestamp: OffsetDateTime,
    pub level: LogLevel,
    pub service: String,
    pub message: String,
    pub details: LogDetails,
}

/// Serializes a record into the BSON document that gets written to the store.
pub fn to_document<T: Serialize>(record: &T) -> Result<Document, StoreError> {
    Ok(bson::to_document(record)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::Bson;
    use time::macros::datetime;

    fn sample_transaction() -> Transaction {
        Transaction {
            transaction_id: "TXN900".to_string(),
            customer_id: "CUST900".to_string(),
            amount: 42000,
            category: "카페".to_string(),
            merchant: "테스트".to_string(),
            timestamp: datetime!(2025-08-12 10:30 UTC),
            location: GeoLocation::new("서울", "강남구", 127.0276, 37.4979),
            risk_score: 0.2,
            is_suspicious: false,
            payment_method: "신용카드".to_string(),
            card_type: "VISA".to_string(),
        }
    }

    #[test]
    fn test_transaction_document_shape() {
        let doc = to_document(&sample_transaction()).unwrap();

        assert_eq!(doc.get_str("transaction_id").unwrap(), "TXN900");
        assert_eq!(doc.get("amount"), Some(&Bson::Int32(42000)));
        assert!(matches!(doc.get("timestamp"), Some(Bson::DateTime(_))));

        let coords = doc
            .get_document("location")
            .unwrap()
            .get_array("coordinates")
            .unwrap();
        assert_eq!(coords, &vec![Bson::Double(127.0276), Bson::Double(37.4979)]);
    }

    #[test]
    fn test_enums_serialize_uppercase() {
        assert_eq!(
            bson::to_bson(&RiskLevel::Medium).unwrap(),
            Bson::String("MEDIUM".to_string())
        );
        assert_eq!(
            bson::to_bson(&LogLevel::Warn).unwrap(),
            Bson::String(LogLevel::Warn.as_str().to_string())
        );
    }

    #[test]
    fn test_coordinate_bounds() {
        assert!(GeoLocation::new("해외", "알 수 없음", 0.0, 0.0).has_valid_coordinates());
        assert!(!GeoLocation::new("x", "y", 181.0, 0.0).has_valid_coordinates());
        assert!(!GeoLocation::new("x", "y", 0.0, f64::NAN).has_valid_coordinates());

        let point = GeoLocation::new("서울", "종로구", 126.978, 37.5735).point();
        assert_eq!(point.x(), 126.978);
        assert_eq!(point.y(), 37.5735);
    }
}
