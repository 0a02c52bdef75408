//! Operator script: applies a named SQL migration file.
//!
//! Runs with the service-role connection string, outside the request path.
//! Usage: `apply_migration migrations/0001_init.sql`

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::Executor;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: apply_migration <migration.sql>")?;

    let url = std::env::var("SERVICE_DATABASE_URL")
        .context("SERVICE_DATABASE_URL is not set (service-role credential, scripts only)")?;

    let sql = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read migration file '{path}'"))?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .context("Failed to connect with the service-role URL")?;

    info!("Applying migration {path}...");

    // Simple query protocol: the whole file runs as one multi-statement batch.
    pool.execute(sql.as_str())
        .await
        .with_context(|| format!("Migration '{path}' failed"))?;

    info!("Migration {path} applied");
    Ok(())
}
