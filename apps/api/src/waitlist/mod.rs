//! Waitlist signup.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::waitlist::UserType;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistRequest {
    pub email: String,
    /// Parsed by hand so an unknown tag is a 400, not a body-rejection.
    pub user_type: String,
}

#[derive(Debug, Serialize)]
pub struct WaitlistResponse {
    pub success: bool,
}

/// POST /api/v1/waitlist
///
/// The insert is the authoritative operation; the confirmation email is
/// best-effort at-most-once. A duplicate email is a 409 and sends nothing.
pub async fn handle_join_waitlist(
    State(state): State<AppState>,
    Json(request): Json<WaitlistRequest>,
) -> Result<Json<WaitlistResponse>, AppError> {
    let email = request.email.trim().to_lowercase();
    if !is_plausible_email(&email) {
        return Err(AppError::Validation("A valid email is required".to_string()));
    }

    let user_type: UserType = request
        .user_type
        .parse()
        .map_err(|_| AppError::Validation("userType must be employer or jobseeker".to_string()))?;

    let entry = store::insert_waitlist_entry(&state.db, &email, user_type)
        .await
        .map_err(|e| {
            if store::is_unique_violation(&e) {
                AppError::Conflict("This email is already on the waitlist".to_string())
            } else {
                AppError::Database(e)
            }
        })?;

    info!("Waitlist signup: {} ({})", entry.email, entry.user_type);

    // Decoupled from the committed insert: log and swallow.
    if let Err(e) = state
        .mailer
        .send_waitlist_confirmation(&entry.email, user_type)
        .await
    {
        warn!("Waitlist confirmation email failed for {}: {e:#}", entry.email);
    }

    Ok(Json(WaitlistResponse { success: true }))
}

fn is_plausible_email(email: &str) -> bool {
    if email.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_addresses() {
        assert!(is_plausible_email("ada@example.com"));
        assert!(is_plausible_email("a.b+tag@sub.example.co"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_plausible_email(""));
        assert!(!is_plausible_email("no-at-sign"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("a@nodot"));
        assert!(!is_plausible_email("spaced out@example.com"));
        assert!(!is_plausible_email("a@.com"));
    }
}
