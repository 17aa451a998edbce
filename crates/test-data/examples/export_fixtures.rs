//! Example: Export the fixture payload as relaxed Extended JSON.
//!
//! Prints one JSON object keyed by collection name to stdout, which is handy
//! for diffing the payload or loading it with `mongoimport --jsonArray`
//! (one array per collection). Per-category spend goes to the log.
//!
//! Run with:
//! ```
//! cargo run --example export_fixtures
//! ```

use bson::Bson;
use serde_json::{Map, Value};
use test_data::fixtures::FixtureSet;
use test_data::validate::validate;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let fixtures = FixtureSet::standard();
    validate(&fixtures)?;

    let mut export = Map::new();
    for (collection, docs) in fixtures.documents()? {
        let values: Vec<Value> = docs
            .into_iter()
            .map(|doc| Bson::Document(doc).into_relaxed_extjson())
            .collect();
        export.insert(collection.to_string(), Value::Array(values));
    }

    println!("{}", serde_json::to_string_pretty(&Value::Object(export))?);

    tracing::info!("Spend by category:");
    for total in fixtures.category_totals() {
        tracing::info!(
            "  {}: {} KRW over {} transaction(s)",
            total.category,
            total.total_amount,
            total.count
        );
    }

    Ok(())
}
