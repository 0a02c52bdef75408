//! Completion scoring — heuristic checklist over a fixed field set.
//!
//! Pure functions, no I/O. A string field counts iff its trimmed length is
//! non-zero, a collection iff non-empty, a numeric iff non-null. The score is
//! never stored; it is recomputed on every read.

use crate::models::company::CompanyRow;
use crate::models::profile::ProfileRow;

/// Tracked profile fields.
const PROFILE_FIELDS: usize = 11;
/// Tracked company fields.
const COMPANY_FIELDS: usize = 8;

/// Completion percentage for a job-seeker profile. `None` scores 0.
pub fn profile_completion(profile: Option<&ProfileRow>) -> u8 {
    let Some(p) = profile else { return 0 };

    let present = [
        text_present(p.full_name.as_deref()),
        text_present(p.phone.as_deref()),
        text_present(p.headline.as_deref()),
        text_present(p.bio.as_deref()),
        text_present(p.location.as_deref()),
        !p.skills.is_empty(),
        p.experience_years.is_some(),
        text_present(p.linkedin_url.as_deref()),
        text_present(p.portfolio_url.as_deref()),
        text_present(p.resume_url.as_deref()),
        text_present(p.photo_url.as_deref()),
    ]
    .iter()
    .filter(|&&b| b)
    .count();

    percentage(present, PROFILE_FIELDS)
}

/// Completion percentage for a company profile. `None` scores 0.
pub fn company_completion(company: Option<&CompanyRow>) -> u8 {
    let Some(c) = company else { return 0 };

    let present = [
        text_present(Some(&c.name)),
        text_present(Some(&c.email)),
        text_present(c.logo_url.as_deref()),
        text_present(c.website.as_deref()),
        text_present(c.description.as_deref()),
        text_present(c.size.as_deref()),
        text_present(c.industry.as_deref()),
        text_present(c.location.as_deref()),
    ]
    .iter()
    .filter(|&&b| b)
    .count();

    percentage(present, COMPANY_FIELDS)
}

fn text_present(value: Option<&str>) -> bool {
    value.map(|v| !v.trim().is_empty()).unwrap_or(false)
}

/// Round-half-up percentage.
fn percentage(present: usize, total: usize) -> u8 {
    (present as f64 / total as f64 * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn empty_profile() -> ProfileRow {
        ProfileRow {
            user_id: Uuid::new_v4(),
            full_name: None,
            phone: None,
            headline: None,
            bio: None,
            location: None,
            skills: vec![],
            experience_years: None,
            linkedin_url: None,
            portfolio_url: None,
            resume_url: None,
            photo_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn full_profile() -> ProfileRow {
        ProfileRow {
            full_name: Some("Ada Lovelace".to_string()),
            phone: Some("+1 555 0100".to_string()),
            headline: Some("Automation Specialist".to_string()),
            bio: Some("Ten years of funnel builds.".to_string()),
            location: Some("Austin, TX".to_string()),
            skills: vec!["workflows".to_string(), "api".to_string()],
            experience_years: Some(10),
            linkedin_url: Some("https://linkedin.com/in/ada".to_string()),
            portfolio_url: Some("https://ada.dev".to_string()),
            resume_url: Some("https://cdn.example.com/ada.pdf".to_string()),
            photo_url: Some("https://cdn.example.com/ada.jpg".to_string()),
            ..empty_profile()
        }
    }

    fn minimal_company() -> CompanyRow {
        CompanyRow {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: "Acme Agency".to_string(),
            email: "ops@acme.test".to_string(),
            logo_url: None,
            website: None,
            description: None,
            size: None,
            industry: None,
            location: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_missing_profile_scores_zero() {
        assert_eq!(profile_completion(None), 0);
    }

    #[test]
    fn test_empty_profile_scores_zero() {
        assert_eq!(profile_completion(Some(&empty_profile())), 0);
    }

    #[test]
    fn test_full_profile_scores_hundred() {
        assert_eq!(profile_completion(Some(&full_profile())), 100);
    }

    #[test]
    fn test_whitespace_only_field_does_not_count() {
        let p = ProfileRow {
            full_name: Some("   ".to_string()),
            ..empty_profile()
        };
        assert_eq!(profile_completion(Some(&p)), 0);
    }

    #[test]
    fn test_zero_experience_years_counts_as_present() {
        let p = ProfileRow {
            experience_years: Some(0),
            ..empty_profile()
        };
        // 1 of 11 -> 9.09 -> 9
        assert_eq!(profile_completion(Some(&p)), 9);
    }

    #[test]
    fn test_company_required_pair_scores_twenty_five() {
        assert_eq!(company_completion(Some(&minimal_company())), 25);
    }

    #[test]
    fn test_company_rounds_half_up() {
        // 1 of 8 present -> 12.5 -> 13
        let c = CompanyRow {
            email: String::new(),
            ..minimal_company()
        };
        assert_eq!(company_completion(Some(&c)), 13);
    }

    #[test]
    fn test_full_company_scores_hundred() {
        let c = CompanyRow {
            logo_url: Some("https://cdn.example.com/logo.png".to_string()),
            website: Some("https://acme.test".to_string()),
            description: Some("We build funnels.".to_string()),
            size: Some("11-50".to_string()),
            industry: Some("Marketing".to_string()),
            location: Some("Remote".to_string()),
            ..minimal_company()
        };
        assert_eq!(company_completion(Some(&c)), 100);
    }

    #[test]
    fn test_missing_company_scores_zero() {
        assert_eq!(company_completion(None), 0);
    }
}
