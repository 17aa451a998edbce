//! Default seed script - loads the fixture collections and indexes
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin seed
//! ```

use docstore::MongoStore;
use test_data::config::SeedConfig;
use test_data::db::Seeder;
use test_data::fixtures::FixtureSet;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();

    let store = MongoStore::connect(&config.mongodb_uri, &config.database).await?;

    tracing::info!("Connected to database {}", config.database);

    let seeder = Seeder::new(store).with_drop_existing(config.drop_existing);
    let summary = seeder.run(&FixtureSet::standard()).await?;

    println!("{summary}");

    if config.smoke_check {
        let report = seeder.smoke_check().await?;
        tracing::info!("Smoke check:");
        for line in report.to_string().lines() {
            tracing::info!("  {}", line);
        }
    }

    Ok(())
}
