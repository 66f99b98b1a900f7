// ABOUTME: Entry point that provisions the bookmark store database
// ABOUTME: Loads configuration, sets up logging, connects and applies pending migrations

use bookmark_store::migration::Migrator;
use bookmark_store::{Config, Storage};
use clap::Parser;
use sea_orm_migration::MigratorTrait;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(&config);

    let storage = Storage::connect(&config).await?;

    let applied = Migrator::get_applied_migrations(&storage.db).await?;
    tracing::info!(
        applied = applied.len(),
        url = %config.database_url,
        "bookmark store provisioned"
    );

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter);

    let result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing init failed: {e}");
    }
}
