//! System log fixtures, five minutes apart.

use docstore::models::{LogDetails, LogLevel, SystemLogEntry};
use time::macros::datetime;

/// The fixed system log batch.
pub fn system_logs() -> Vec<SystemLogEntry> {
    let entry = |log_id: &str, timestamp, level, service: &str, message: &str, details| {
        SystemLogEntry {
            log_id: log_id.to_string(),
            timestamp,
            level,
            service: service.to_string(),
            message: message.to_string(),
            details,
        }
    };

    vec![
        entry(
            "LOG001",
            datetime!(2025-08-12 10:00 UTC),
            LogLevel::Info,
            "transaction_service",
            "거래 처리 시작",
            LogDetails {
                cpu_usage: 45.2,
                memory_usage: 67.8,
                response_time: 120,
                active_connections: 150,
            },
        ),
        entry(
            "LOG002",
            datetime!(2025-08-12 10:05 UTC),
            LogLevel::Warn,
            "fraud_detection",
            "의심스러운 거래 감지",
            LogDetails {
                cpu_usage: 78.5,
                memory_usage: 82.3,
                response_time: 450,
                active_connections: 180,
            },
        ),
        entry(
            "LOG003",
            datetime!(2025-08-12 10:10 UTC),
            LogLevel::Error,
            "payment_gateway",
            "결제 게이트웨이 연결 실패",
            LogDetails {
                cpu_usage: 95.1,
                memory_usage: 89.7,
                response_time: 1200,
                active_connections: 200,
            },
        ),
        entry(
            "LOG004",
            datetime!(2025-08-12 10:15 UTC),
            LogLevel::Info,
            "user_authentication",
            "사용자 인증 성공",
            LogDetails {
                cpu_usage: 52.3,
                memory_usage: 71.2,
                response_time: 180,
                active_connections: 165,
            },
        ),
        entry(
            "LOG005",
            datetime!(2025-08-12 10:20 UTC),
            LogLevel::Info,
            "database_service",
            "데이터베이스 연결 정상",
            LogDetails {
                cpu_usage: 48.7,
                memory_usage: 69.5,
                response_time: 95,
                active_connections: 140,
            },
        ),
    ]
}
