//! Axum route handlers for the AI endpoints.
//!
//! Validation runs before any provider call; provider failures are mapped to
//! generic 500s at the error boundary with the cause logged server-side.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::ai::matcher::{MatchInput, MatchReport};
use crate::ai::prompts::{
    ENHANCE_SYSTEM, ENHANCE_TEMPLATE, RESUME_ANALYSIS_SYSTEM, RESUME_ANALYSIS_TEMPLATE,
};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResumeRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResumeResponse {
    pub analysis: String,
    pub success: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceDescriptionRequest {
    pub description: String,
    pub job_title: String,
    #[serde(default = "default_industry")]
    pub industry: String,
}

fn default_industry() -> String {
    "GoHighLevel".to_string()
}

#[derive(Debug, Serialize)]
pub struct EnhanceDescriptionResponse {
    pub enhanced_description: String,
    pub original_description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchJobRequest {
    pub job_description: String,
    pub job_title: String,
    pub candidate_resume: String,
    #[serde(default)]
    pub candidate_skills: Vec<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchJobResponse {
    #[serde(rename = "match")]
    pub report: MatchReport,
    pub success: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/analyze-resume
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeResumeRequest>,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resumeText cannot be empty".to_string(),
        ));
    }

    let prompt = RESUME_ANALYSIS_TEMPLATE.replace("{resume_text}", &request.resume_text);
    let analysis = state
        .ai
        .complete(RESUME_ANALYSIS_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Ai(format!("Resume analysis failed: {e}")))?;

    Ok(Json(AnalyzeResumeResponse {
        analysis,
        success: true,
    }))
}

/// POST /api/v1/ai/enhance-description
///
/// Industry defaults to "GoHighLevel" when the caller omits it.
pub async fn handle_enhance_description(
    State(state): State<AppState>,
    Json(request): Json<EnhanceDescriptionRequest>,
) -> Result<Json<EnhanceDescriptionResponse>, AppError> {
    if request.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("jobTitle cannot be empty".to_string()));
    }

    let prompt = ENHANCE_TEMPLATE
        .replace("{job_title}", &request.job_title)
        .replace("{industry}", &request.industry)
        .replace("{description}", &request.description);

    let enhanced = state
        .ai
        .complete(ENHANCE_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Ai(format!("Description enhancement failed: {e}")))?;

    Ok(Json(EnhanceDescriptionResponse {
        enhanced_description: enhanced,
        original_description: request.description,
    }))
}

/// POST /api/v1/ai/match-job
pub async fn handle_match_job(
    State(state): State<AppState>,
    Json(request): Json<MatchJobRequest>,
) -> Result<Json<MatchJobResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("jobTitle cannot be empty".to_string()));
    }
    if request.candidate_resume.trim().is_empty() {
        return Err(AppError::Validation(
            "candidateResume cannot be empty".to_string(),
        ));
    }

    let input = MatchInput {
        job_title: request.job_title,
        job_description: request.job_description,
        candidate_resume: request.candidate_resume,
        candidate_skills: request.candidate_skills,
        required_skills: request.required_skills,
    };

    let report = state.match_scorer.score(&input).await?;

    Ok(Json(MatchJobResponse {
        report,
        success: true,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhance_request_defaults_industry() {
        let req: EnhanceDescriptionRequest = serde_json::from_str(
            r#"{"description": "Build funnels", "jobTitle": "GHL Developer"}"#,
        )
        .unwrap();
        assert_eq!(req.industry, "GoHighLevel");
    }

    #[test]
    fn test_enhance_request_honors_explicit_industry() {
        let req: EnhanceDescriptionRequest = serde_json::from_str(
            r#"{"description": "Build funnels", "jobTitle": "Dev", "industry": "SaaS"}"#,
        )
        .unwrap();
        assert_eq!(req.industry, "SaaS");
    }

    #[test]
    fn test_match_request_defaults_skill_lists_to_empty() {
        let req: MatchJobRequest = serde_json::from_str(
            r#"{"jobDescription": "d", "jobTitle": "t", "candidateResume": "r"}"#,
        )
        .unwrap();
        assert!(req.candidate_skills.is_empty());
        assert!(req.required_skills.is_empty());
    }

    #[test]
    fn test_match_response_serializes_report_under_match_key() {
        let response = MatchJobResponse {
            report: MatchReport {
                match_score: 80,
                matched_skills: vec![],
                missing_skills: vec![],
                summary: "ok".to_string(),
            },
            success: true,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["match"]["match_score"], 80);
        assert_eq!(json["success"], true);
    }
}
