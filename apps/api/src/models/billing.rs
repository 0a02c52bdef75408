use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Invoice header. Belongs to exactly one company; `job_id` links the
/// posting the invoice bills for, when there is one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InvoiceRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub job_id: Option<Uuid>,
    pub number: String,
    pub status: String,
    pub currency: String,
    pub tax_cents: i64,
    pub issued_at: DateTime<Utc>,
    pub due_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// One billed line. Amounts are integer cents.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InvoiceItemRow {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub description: String,
    pub quantity: i32,
    pub unit_cents: i64,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PaymentRow {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub method: String,
    pub reference: Option<String>,
    pub amount_cents: i64,
    pub paid_at: DateTime<Utc>,
}
