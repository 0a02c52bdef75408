use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
///
/// The service-role database URL is deliberately absent: it is read only by
/// the maintenance binaries under `src/bin/`, never by request handlers.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub auth_jwt_secret: String,
    pub anthropic_api_key: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub mail_from: String,
    pub site_url: String,
    pub match_scorer_backend: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            auth_jwt_secret: require_env("AUTH_JWT_SECRET")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            smtp_host: require_env("SMTP_HOST")?,
            smtp_port: std::env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse::<u16>()
                .context("SMTP_PORT must be a valid port number")?,
            smtp_username: require_env("SMTP_USERNAME")?,
            smtp_password: require_env("SMTP_PASSWORD")?,
            mail_from: require_env("MAIL_FROM")?,
            site_url: std::env::var("SITE_URL")
                .unwrap_or_else(|_| "https://ghljobs.example.com".to_string()),
            match_scorer_backend: std::env::var("MATCH_SCORER_BACKEND")
                .unwrap_or_else(|_| "llm".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
