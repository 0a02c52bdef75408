//! Operator script: verifies the critical tables and the storage bucket
//! are present and reachable. Exits non-zero when any check fails.

use anyhow::{bail, Context, Result};
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};

const CHECKED_TABLES: &[&str] = &["public.waitlist", "public.invoices"];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let url = std::env::var("SERVICE_DATABASE_URL")
        .context("SERVICE_DATABASE_URL is not set (service-role credential, scripts only)")?;
    let bucket = std::env::var("S3_BUCKET").context("S3_BUCKET is not set")?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .context("Failed to connect with the service-role URL")?;

    let mut failures = 0;

    for table in CHECKED_TABLES {
        let found: Option<String> = sqlx::query_scalar("SELECT to_regclass($1)::text")
            .bind(*table)
            .fetch_one(&pool)
            .await
            .with_context(|| format!("Lookup for {table} failed"))?;
        match found {
            Some(_) => info!("table {table}: ok"),
            None => {
                error!("table {table}: MISSING");
                failures += 1;
            }
        }
    }

    let s3 = build_s3_client().await?;
    match s3.head_bucket().bucket(&bucket).send().await {
        Ok(_) => info!("bucket {bucket}: ok"),
        Err(e) => {
            error!("bucket {bucket}: UNREACHABLE ({e})");
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} check(s) failed");
    }
    info!("All checks passed");
    Ok(())
}

async fn build_s3_client() -> Result<aws_sdk_s3::Client> {
    let endpoint = std::env::var("S3_ENDPOINT").context("S3_ENDPOINT is not set")?;
    let access_key = std::env::var("AWS_ACCESS_KEY_ID").context("AWS_ACCESS_KEY_ID is not set")?;
    let secret_key =
        std::env::var("AWS_SECRET_ACCESS_KEY").context("AWS_SECRET_ACCESS_KEY is not set")?;

    let credentials = Credentials::new(access_key, secret_key, None, None, "jobboard-scripts");
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(endpoint)
        .load()
        .await;

    Ok(aws_sdk_s3::Client::new(&config))
}
