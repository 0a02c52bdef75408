use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Plan limits for one company. One row per company.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubscriptionRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub plan: String,
    pub job_post_limit: i32,
    pub featured_job_limit: i32,
    pub team_member_limit: i32,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
}
