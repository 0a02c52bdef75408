//! Invoice assembly — gathers the rows one invoice render needs.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::billing::{InvoiceItemRow, InvoiceRow, PaymentRow};
use crate::models::company::CompanyRow;
use crate::models::job::JobRow;
use crate::store;

/// The assembled bundle. `render` is a pure function of this value, and the
/// `format=json` response is this value serialized verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceData {
    pub invoice: InvoiceRow,
    pub company: CompanyRow,
    pub job: Option<JobRow>,
    pub items: Vec<InvoiceItemRow>,
    pub payment: Option<PaymentRow>,
    pub subtotal_cents: i64,
    pub total_cents: i64,
}

/// Loads everything needed to render one invoice.
///
/// Fails closed: a missing invoice, missing owning company, or missing line
/// rows all come back as `Ok(None)`. Store failures propagate as `Err` so the
/// handler can keep its 404/500 distinction. The job and payment rows are
/// enrichment; their absence does not fail the bundle.
pub async fn assemble(pool: &PgPool, invoice_id: Uuid) -> Result<Option<InvoiceData>, sqlx::Error> {
    let Some(invoice) = store::invoice_by_id(pool, invoice_id).await? else {
        return Ok(None);
    };

    let Some(company) = store::company_by_id(pool, invoice.company_id).await? else {
        return Ok(None);
    };

    let items = store::invoice_items(pool, invoice_id).await?;
    if items.is_empty() {
        // An invoice with no line rows cannot be rendered meaningfully.
        return Ok(None);
    }

    let job = match invoice.job_id {
        Some(job_id) => store::job_by_id(pool, job_id).await?,
        None => None,
    };
    let payment = store::payment_by_invoice(pool, invoice_id).await?;

    let subtotal_cents = items
        .iter()
        .map(|i| i64::from(i.quantity) * i.unit_cents)
        .sum::<i64>();
    let total_cents = subtotal_cents + invoice.tax_cents;

    Ok(Some(InvoiceData {
        invoice,
        company,
        job,
        items,
        payment,
        subtotal_cents,
        total_cents,
    }))
}
