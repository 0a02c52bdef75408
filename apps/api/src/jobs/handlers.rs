//! Public job lookup by display slug.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::slug;
use crate::models::company::CompanyRow;
use crate::models::job::JobRow;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Serialize)]
pub struct CompanySummary {
    pub id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
    pub location: Option<String>,
}

impl From<CompanyRow> for CompanySummary {
    fn from(c: CompanyRow) -> Self {
        CompanySummary {
            id: c.id,
            name: c.name,
            logo_url: c.logo_url,
            location: c.location,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobDetailResponse {
    pub job: JobRow,
    /// Canonical slug for this posting; may differ from the requested one
    /// when the title changed after the link was shared.
    pub slug: String,
    pub company: Option<CompanySummary>,
}

/// GET /api/v1/jobs/:slug
///
/// Decodes the trailing slug segment and resolves it as an id prefix.
/// Both an undecodable slug and a prefix miss are plain 404s.
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(requested): Path<String>,
) -> Result<Json<JobDetailResponse>, AppError> {
    let not_found = || AppError::NotFound("Job not found".to_string());

    let prefix = slug::decode(&requested).ok_or_else(not_found)?;
    let job = store::job_by_id_prefix(&state.db, prefix)
        .await?
        .ok_or_else(not_found)?;

    let company = store::company_by_id(&state.db, job.company_id).await?;
    let canonical = slug::encode(&job.title, &job.id.to_string());

    Ok(Json(JobDetailResponse {
        slug: canonical,
        company: company.map(CompanySummary::from),
        job,
    }))
}
