//! Data-access façade over the external relational store.
//!
//! Typed row accessors only: no business logic, no response shaping.
//! All functions surface `sqlx::Error` unchanged so handlers decide how a
//! miss or a failure maps to HTTP.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::billing::{InvoiceItemRow, InvoiceRow, PaymentRow};
use crate::models::company::CompanyRow;
use crate::models::job::JobRow;
use crate::models::profile::ProfileRow;
use crate::models::subscription::SubscriptionRow;
use crate::models::waitlist::{UserType, WaitlistRow};

pub async fn profile_by_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<ProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn company_by_owner(
    pool: &PgPool,
    owner_id: Uuid,
) -> Result<Option<CompanyRow>, sqlx::Error> {
    sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE owner_id = $1")
        .bind(owner_id)
        .fetch_optional(pool)
        .await
}

pub async fn company_by_id(pool: &PgPool, id: Uuid) -> Result<Option<CompanyRow>, sqlx::Error> {
    sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn job_by_id(pool: &PgPool, id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Resolves a decoded slug segment as an id prefix.
///
/// The slug codec is lossy, so a prefix can in principle match several jobs;
/// ordering by creation time makes the collision resolution deterministic
/// (oldest posting wins). A miss here is a normal empty result.
pub async fn job_by_id_prefix(
    pool: &PgPool,
    prefix: &str,
) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        "SELECT * FROM jobs WHERE id::text LIKE $1 || '%' ORDER BY created_at ASC LIMIT 1",
    )
    .bind(prefix)
    .fetch_optional(pool)
    .await
}

pub async fn job_count(pool: &PgPool, company_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs WHERE company_id = $1")
        .bind(company_id)
        .fetch_one(pool)
        .await
}

pub async fn subscription_by_company(
    pool: &PgPool,
    company_id: Uuid,
) -> Result<Option<SubscriptionRow>, sqlx::Error> {
    sqlx::query_as::<_, SubscriptionRow>("SELECT * FROM subscriptions WHERE company_id = $1")
        .bind(company_id)
        .fetch_optional(pool)
        .await
}

pub async fn invoice_by_id(pool: &PgPool, id: Uuid) -> Result<Option<InvoiceRow>, sqlx::Error> {
    sqlx::query_as::<_, InvoiceRow>("SELECT * FROM invoices WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn invoice_items(
    pool: &PgPool,
    invoice_id: Uuid,
) -> Result<Vec<InvoiceItemRow>, sqlx::Error> {
    sqlx::query_as::<_, InvoiceItemRow>(
        "SELECT * FROM invoice_items WHERE invoice_id = $1 ORDER BY position, id",
    )
    .bind(invoice_id)
    .fetch_all(pool)
    .await
}

pub async fn payment_by_invoice(
    pool: &PgPool,
    invoice_id: Uuid,
) -> Result<Option<PaymentRow>, sqlx::Error> {
    sqlx::query_as::<_, PaymentRow>(
        "SELECT * FROM payments WHERE invoice_id = $1 ORDER BY paid_at DESC LIMIT 1",
    )
    .bind(invoice_id)
    .fetch_optional(pool)
    .await
}

/// Inserts a waitlist signup. The store enforces email uniqueness; use
/// `is_unique_violation` on the error to map a duplicate to a conflict.
pub async fn insert_waitlist_entry(
    pool: &PgPool,
    email: &str,
    user_type: UserType,
) -> Result<WaitlistRow, sqlx::Error> {
    sqlx::query_as::<_, WaitlistRow>(
        "INSERT INTO waitlist (email, user_type) VALUES ($1, $2) RETURNING *",
    )
    .bind(email)
    .bind(user_type.as_str())
    .fetch_one(pool)
    .await
}

/// True when the error is the store's unique-key violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => {
            matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation)
        }
        _ => false,
    }
}
