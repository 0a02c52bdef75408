//! Session verification and the ownership capability.
//!
//! Tokens are minted by the external identity provider; this module only
//! verifies them (HS256, shared secret) and resolves the owning company.
//! Every owner-scoped handler goes through `owned_company` so the
//! load-user/load-company/compare-id sequence cannot drift between endpoints.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::company::CompanyRow;
use crate::state::AppState;
use crate::store;

/// Claims carried by the identity provider's access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: Uuid,
    pub email: Option<String>,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// The authenticated caller, extracted from the `Authorization: Bearer` header.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub email: Option<String>,
}

/// Verifies a bearer token against the shared secret and returns its claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        debug!("Token verification failed: {e}");
        AppError::Unauthorized
    })
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let claims = decode_token(token, &state.config.auth_jwt_secret)?;

        Ok(CurrentUser {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}

/// Resolves the company owned by the given user, if any.
///
/// The single authorization capability: resources scoped to a company must
/// compare against the id returned here, and treat both "no company" and
/// "different company" as not-found.
pub async fn owned_company(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<CompanyRow>, sqlx::Error> {
    store::company_by_owner(pool, user_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn make_token(secret: &str, exp: usize) -> String {
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: Some("user@example.com".to_string()),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn far_future() -> usize {
        (chrono::Utc::now().timestamp() + 3600) as usize
    }

    #[test]
    fn test_decode_valid_token() {
        let token = make_token(SECRET, far_future());
        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn test_decode_rejects_wrong_secret() {
        let token = make_token("other-secret", far_future());
        assert!(matches!(
            decode_token(&token, SECRET),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_decode_rejects_expired_token() {
        let past = (chrono::Utc::now().timestamp() - 3600) as usize;
        let token = make_token(SECRET, past);
        assert!(matches!(
            decode_token(&token, SECRET),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_token("not-a-jwt", SECRET),
            Err(AppError::Unauthorized)
        ));
    }
}
