use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WaitlistRow {
    pub id: Uuid,
    pub email: String,
    pub user_type: String,
    pub created_at: DateTime<Utc>,
}

/// Which side of the board a waitlist signup is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Employer,
    Jobseeker,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Employer => "employer",
            UserType::Jobseeker => "jobseeker",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employer" => Ok(UserType::Employer),
            "jobseeker" => Ok(UserType::Jobseeker),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_type_parses_both_variants() {
        assert_eq!("employer".parse::<UserType>(), Ok(UserType::Employer));
        assert_eq!("jobseeker".parse::<UserType>(), Ok(UserType::Jobseeker));
    }

    #[test]
    fn test_user_type_rejects_unknown_tag() {
        assert!("recruiter".parse::<UserType>().is_err());
        assert!("EMPLOYER".parse::<UserType>().is_err());
        assert!("".parse::<UserType>().is_err());
    }

    #[test]
    fn test_user_type_round_trips_through_as_str() {
        for t in [UserType::Employer, UserType::Jobseeker] {
            assert_eq!(t.as_str().parse::<UserType>(), Ok(t));
        }
    }
}
