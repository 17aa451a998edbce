//! Configuration for seeding runs.

use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/";
pub const DEFAULT_DATABASE: &str = "opensearch_test";

/// Configuration for seeding operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Connection string for the target server.
    pub mongodb_uri: String,

    /// Logical database the collections are created in.
    pub database: String,

    /// Drop the fixture collections before seeding instead of failing on them.
    pub drop_existing: bool,

    /// Run the post-seed smoke queries.
    pub smoke_check: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            drop_existing: false,
            smoke_check: true,
        }
    }
}

impl SeedConfig {
    /// Reads `MONGODB_URI`, `SEED_DATABASE`, `SEED_DROP_EXISTING` and
    /// `SEED_SMOKE_CHECK`, falling back to the defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            mongodb_uri: lookup("MONGODB_URI").unwrap_or(defaults.mongodb_uri),
            database: lookup("SEED_DATABASE").unwrap_or(defaults.database),
            drop_existing: lookup("SEED_DROP_EXISTING")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.drop_existing),
            smoke_check: lookup("SEED_SMOKE_CHECK")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.smoke_check),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = SeedConfig::from_lookup(|_| None);
        assert_eq!(config, SeedConfig::default());
        assert_eq!(config.database, "opensearch_test");
        assert!(!config.drop_existing);
        assert!(config.smoke_check);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("MONGODB_URI", "mongodb://mongo:27017/"),
            ("SEED_DATABASE", "fixtures"),
            ("SEED_DROP_EXISTING", "Yes"),
            ("SEED_SMOKE_CHECK", "0"),
        ]
        .into_iter()
        .collect();

        let config = SeedConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.mongodb_uri, "mongodb://mongo:27017/");
        assert_eq!(config.database, "fixtures");
        assert!(config.drop_existing);
        assert!(!config.smoke_check);
    }
}
