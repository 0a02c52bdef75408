//! Match scoring — pluggable, trait-based candidate/job fit.
//!
//! Default: `LlmMatchScorer` (provider JSON mode). `OverlapMatchScorer` is a
//! deterministic token-overlap fallback used in tests and selectable at
//! startup for degraded operation when the provider is unavailable.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, swapped via MATCH_SCORER_BACKEND.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ai::client::AiClient;
use crate::ai::prompts::{MATCH_SYSTEM, MATCH_TEMPLATE};
use crate::errors::AppError;

/// Fit report returned to callers, shared across scorer backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// 0 – 100.
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub summary: String,
}

/// Everything a scorer may consider. Skill lists default to empty.
#[derive(Debug, Clone)]
pub struct MatchInput {
    pub job_title: String,
    pub job_description: String,
    pub candidate_resume: String,
    pub candidate_skills: Vec<String>,
    pub required_skills: Vec<String>,
}

/// Implement this to swap scoring backends without touching the endpoint.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(&self, input: &MatchInput) -> Result<MatchReport, AppError>;
}

/// Provider-backed scorer. The prompt enforces the report schema; parse
/// failures surface as provider errors (500), never as partial reports.
pub struct LlmMatchScorer(pub AiClient);

#[async_trait]
impl MatchScorer for LlmMatchScorer {
    async fn score(&self, input: &MatchInput) -> Result<MatchReport, AppError> {
        let prompt = MATCH_TEMPLATE
            .replace("{job_title}", &input.job_title)
            .replace("{job_description}", &input.job_description)
            .replace("{required_skills}", &input.required_skills.join(", "))
            .replace("{candidate_resume}", &input.candidate_resume)
            .replace("{candidate_skills}", &input.candidate_skills.join(", "));

        self.0
            .complete_json::<MatchReport>(MATCH_SYSTEM, &prompt)
            .await
            .map_err(|e| AppError::Ai(format!("Match scoring failed: {e}")))
    }
}

/// Deterministic overlap scorer: a required skill is matched when it appears
/// in the candidate's skill list (case-insensitive) or as a substring of the
/// resume. With no required skills, candidate skills are scored against the
/// job description instead.
pub struct OverlapMatchScorer;

#[async_trait]
impl MatchScorer for OverlapMatchScorer {
    async fn score(&self, input: &MatchInput) -> Result<MatchReport, AppError> {
        Ok(compute_overlap(input))
    }
}

fn compute_overlap(input: &MatchInput) -> MatchReport {
    let resume = input.candidate_resume.to_lowercase();
    let candidate: Vec<String> = input
        .candidate_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    if !input.required_skills.is_empty() {
        let mut matched = Vec::new();
        let mut missing = Vec::new();
        for skill in &input.required_skills {
            let needle = skill.trim().to_lowercase();
            if needle.is_empty() {
                continue;
            }
            if candidate.contains(&needle) || resume.contains(&needle) {
                matched.push(skill.clone());
            } else {
                missing.push(skill.clone());
            }
        }
        let considered = matched.len() + missing.len();
        let score = if considered == 0 {
            0
        } else {
            (matched.len() as f64 / considered as f64 * 100.0).round() as u32
        };
        let summary = format!(
            "Matched {} of {} required skills by overlap.",
            matched.len(),
            considered
        );
        return MatchReport {
            match_score: score,
            matched_skills: matched,
            missing_skills: missing,
            summary,
        };
    }

    // No required list: score candidate skills against the description.
    let description = input.job_description.to_lowercase();
    let matched: Vec<String> = input
        .candidate_skills
        .iter()
        .filter(|s| {
            let needle = s.trim().to_lowercase();
            !needle.is_empty() && description.contains(&needle)
        })
        .cloned()
        .collect();
    let score = if input.candidate_skills.is_empty() {
        0
    } else {
        (matched.len() as f64 / input.candidate_skills.len() as f64 * 100.0).round() as u32
    };
    let summary = format!(
        "{} of {} candidate skills appear in the job description.",
        matched.len(),
        input.candidate_skills.len()
    );
    MatchReport {
        match_score: score,
        matched_skills: matched,
        missing_skills: Vec::new(),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(required: &[&str], candidate: &[&str], resume: &str) -> MatchInput {
        MatchInput {
            job_title: "Senior GHL Developer".to_string(),
            job_description: "Build automations and funnels.".to_string(),
            candidate_resume: resume.to_string(),
            candidate_skills: candidate.iter().map(|s| s.to_string()).collect(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_all_required_skills_present_scores_hundred() {
        let report = compute_overlap(&input(
            &["Workflows", "API"],
            &["workflows"],
            "Deep API integration experience.",
        ));
        assert_eq!(report.match_score, 100);
        assert_eq!(report.matched_skills.len(), 2);
        assert!(report.missing_skills.is_empty());
    }

    #[test]
    fn test_empty_input_scores_zero_with_no_matches() {
        let report = compute_overlap(&input(&[], &[], ""));
        assert_eq!(report.match_score, 0);
        assert!(report.matched_skills.is_empty());
        assert!(report.missing_skills.is_empty());
    }

    #[test]
    fn test_partial_overlap_scores_proportionally() {
        let report = compute_overlap(&input(&["funnels", "sql"], &["funnels"], ""));
        assert_eq!(report.match_score, 50);
        assert_eq!(report.matched_skills, vec!["funnels".to_string()]);
        assert_eq!(report.missing_skills, vec!["sql".to_string()]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let report = compute_overlap(&input(&["SQL"], &[], "Wrote sql migrations daily."));
        assert_eq!(report.match_score, 100);
    }

    #[test]
    fn test_candidate_skills_scored_against_description_when_no_required() {
        let report = compute_overlap(&input(&[], &["funnels", "kubernetes"], ""));
        // "funnels" appears in the description, "kubernetes" does not.
        assert_eq!(report.match_score, 50);
        assert_eq!(report.matched_skills, vec!["funnels".to_string()]);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let json = r#"{
            "match_score": 72,
            "matched_skills": ["workflows"],
            "missing_skills": ["api"],
            "summary": "Solid automation background, thin on integrations."
        }"#;
        let report: MatchReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.match_score, 72);
        assert_eq!(report.matched_skills, vec!["workflows".to_string()]);
    }
}
