//! Operator script: probes storage-bucket listing and public-URL generation.
//!
//! Lists the first few objects and prints the public URL each would be
//! served from, so an operator can paste one into a browser to confirm the
//! bucket policy.

use anyhow::{Context, Result};
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
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

    let bucket = std::env::var("S3_BUCKET").context("S3_BUCKET is not set")?;
    let endpoint = std::env::var("S3_ENDPOINT").context("S3_ENDPOINT is not set")?;

    let s3 = build_s3_client(&endpoint).await?;

    let listing = s3
        .list_objects_v2()
        .bucket(&bucket)
        .max_keys(10)
        .send()
        .await
        .with_context(|| format!("Listing bucket '{bucket}' failed"))?;

    let objects = listing.contents();
    if objects.is_empty() {
        info!("Bucket {bucket} is reachable but empty");
        return Ok(());
    }

    info!("Bucket {bucket}: {} object(s) sampled", objects.len());
    for object in objects {
        let key = object.key().unwrap_or("<no key>");
        info!("  {key} -> {}", public_url(&endpoint, &bucket, key));
    }

    Ok(())
}

fn public_url(endpoint: &str, bucket: &str, key: &str) -> String {
    format!("{}/{bucket}/{key}", endpoint.trim_end_matches('/'))
}

async fn build_s3_client(endpoint: &str) -> Result<aws_sdk_s3::Client> {
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
