// All AI prompt constants for the job-board endpoints.
// Placeholders in braces are substituted before sending.

/// System prompt for resume analysis — free-text advisory output.
pub const RESUME_ANALYSIS_SYSTEM: &str =
    "You are an expert resume reviewer for a job board serving marketing \
    automation professionals. Give concrete, actionable feedback. \
    Be direct and specific; do not pad with generic advice.";

/// Resume analysis prompt template. Replace `{resume_text}` before sending.
pub const RESUME_ANALYSIS_TEMPLATE: &str = r#"Analyze the following resume and provide:

1. Overall impression (2-3 sentences)
2. Strengths (bullet list)
3. Weaknesses and gaps (bullet list)
4. Concrete improvements, ordered by impact (bullet list)
5. Which job-board roles this candidate is best suited for

RESUME:
{resume_text}"#;

/// System prompt for job-description enhancement — returns the rewritten
/// description only, no commentary.
pub const ENHANCE_SYSTEM: &str =
    "You are an expert job-posting copywriter. Rewrite job descriptions to be \
    clear, specific, and attractive to qualified candidates. \
    Respond with the enhanced description ONLY. \
    Do NOT include preamble, headers about your task, or explanations.";

/// Enhancement prompt template.
/// Replace: {job_title}, {industry}, {description}
pub const ENHANCE_TEMPLATE: &str = r#"Enhance the following job description for the position "{job_title}" in the {industry} industry.

Keep every factual requirement from the original. Improve structure, tighten wording, surface the responsibilities and requirements clearly, and end with a short call to action.

ORIGINAL DESCRIPTION:
{description}"#;

/// System prompt for match scoring — enforces JSON-only output.
pub const MATCH_SYSTEM: &str =
    "You are an expert technical recruiter scoring candidate/job fit. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Match scoring prompt template.
/// Replace: {job_title}, {job_description}, {required_skills},
///          {candidate_resume}, {candidate_skills}
pub const MATCH_TEMPLATE: &str = r#"Score how well the candidate fits the job below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "match_score": 0,
  "matched_skills": ["skill present in both job and candidate"],
  "missing_skills": ["required skill the candidate lacks"],
  "summary": "2-3 sentence justification of the score"
}

Rules:
- match_score is an integer 0-100.
- A skill counts as matched only with concrete evidence in the resume or the candidate skill list.
- List every required skill in exactly one of matched_skills or missing_skills.

JOB TITLE: {job_title}

JOB DESCRIPTION:
{job_description}

REQUIRED SKILLS: {required_skills}

CANDIDATE RESUME:
{candidate_resume}

CANDIDATE SKILLS: {candidate_skills}"#;
