//! Axum route handlers for the account endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::accounts::completion::{company_completion, profile_completion};
use crate::auth::{owned_company, CurrentUser};
use crate::errors::AppError;
use crate::models::company::CompanyRow;
use crate::models::profile::ProfileRow;
use crate::models::subscription::SubscriptionRow;
use crate::state::AppState;
use crate::store;

/// Company payload enriched with derived fields the dashboard needs.
#[derive(Debug, Serialize)]
pub struct CompanyView {
    #[serde(flatten)]
    pub company: CompanyRow,
    pub completion: u8,
    pub job_count: i64,
    pub subscription: Option<SubscriptionRow>,
}

#[derive(Debug, Serialize)]
pub struct CompanyLookupResponse {
    pub company: Option<CompanyView>,
}

#[derive(Debug, Serialize)]
pub struct ProfileLookupResponse {
    pub profile: Option<ProfileRow>,
    pub completion: u8,
}

/// GET /api/v1/user/company
///
/// Resolves the caller's owned company. Having no company row is a normal
/// empty result (`{"company": null}`, HTTP 200), not an error.
pub async fn handle_get_company(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<CompanyLookupResponse>, AppError> {
    let Some(company) = owned_company(&state.db, user.user_id).await? else {
        return Ok(Json(CompanyLookupResponse { company: None }));
    };

    let job_count = store::job_count(&state.db, company.id).await?;
    let subscription = store::subscription_by_company(&state.db, company.id).await?;
    let completion = company_completion(Some(&company));

    Ok(Json(CompanyLookupResponse {
        company: Some(CompanyView {
            company,
            completion,
            job_count,
            subscription,
        }),
    }))
}

/// GET /api/v1/user/profile
///
/// Same contract as the company lookup: no row is `profile: null` with a
/// completion of 0, HTTP 200.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ProfileLookupResponse>, AppError> {
    let profile = store::profile_by_user(&state.db, user.user_id).await?;
    let completion = profile_completion(profile.as_ref());

    Ok(Json(ProfileLookupResponse {
        profile,
        completion,
    }))
}
