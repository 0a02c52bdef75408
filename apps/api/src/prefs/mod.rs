//! User preference store — explicit, injectable client-UI state.
//!
//! The UI used to keep banner dismissal and cookie settings in ad-hoc
//! browser state; here they are named keys behind a trait so handlers never
//! touch storage directly and tests can swap in the in-memory store.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::state::AppState;

#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, user_id: Uuid, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, user_id: Uuid, key: &str, value: &str) -> Result<(), AppError>;
}

/// Store-backed implementation used in production.
pub struct SqlPreferenceStore {
    pool: PgPool,
}

impl SqlPreferenceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferenceStore for SqlPreferenceStore {
    async fn get(&self, user_id: Uuid, key: &str) -> Result<Option<String>, AppError> {
        let value: Option<String> = sqlx::query_scalar(
            "SELECT value FROM user_preferences WHERE user_id = $1 AND key = $2",
        )
        .bind(user_id)
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;
        Ok(value)
    }

    async fn set(&self, user_id: Uuid, key: &str, value: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO user_preferences (user_id, key, value, updated_at)
            VALUES ($1, $2, $3, now())
            ON CONFLICT (user_id, key) DO UPDATE SET value = $3, updated_at = now()
            "#,
        )
        .bind(user_id)
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

/// In-memory implementation for tests.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<HashMap<(Uuid, String), String>>,
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, user_id: Uuid, key: &str) -> Result<Option<String>, AppError> {
        let entries = self.entries.lock().expect("preference store poisoned");
        Ok(entries.get(&(user_id, key.to_string())).cloned())
    }

    async fn set(&self, user_id: Uuid, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock().expect("preference store poisoned");
        entries.insert((user_id, key.to_string()), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct PreferenceResponse {
    pub key: String,
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PreferenceUpdate {
    pub value: String,
}

/// GET /api/v1/preferences/:key
pub async fn handle_get_preference(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(key): Path<String>,
) -> Result<Json<PreferenceResponse>, AppError> {
    let value = state.prefs.get(user.user_id, &key).await?;
    Ok(Json(PreferenceResponse { key, value }))
}

/// PUT /api/v1/preferences/:key
pub async fn handle_put_preference(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(key): Path<String>,
    Json(update): Json<PreferenceUpdate>,
) -> Result<StatusCode, AppError> {
    if key.trim().is_empty() {
        return Err(AppError::Validation("Preference key is required".to_string()));
    }
    state.prefs.set(user.user_id, &key, &update.value).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_returns_what_was_set() {
        let prefs = MemoryPreferenceStore::default();
        let user = Uuid::new_v4();

        prefs.set(user, "promo_banner", "dismissed").await.unwrap();
        assert_eq!(
            prefs.get(user, "promo_banner").await.unwrap().as_deref(),
            Some("dismissed")
        );
    }

    #[tokio::test]
    async fn test_memory_store_misses_unset_keys() {
        let prefs = MemoryPreferenceStore::default();
        assert_eq!(prefs.get(Uuid::new_v4(), "anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_overwrites_and_isolates_users() {
        let prefs = MemoryPreferenceStore::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        prefs.set(a, "cookie_settings", "all").await.unwrap();
        prefs.set(a, "cookie_settings", "essential").await.unwrap();

        assert_eq!(
            prefs.get(a, "cookie_settings").await.unwrap().as_deref(),
            Some("essential")
        );
        assert_eq!(prefs.get(b, "cookie_settings").await.unwrap(), None);
    }
}
