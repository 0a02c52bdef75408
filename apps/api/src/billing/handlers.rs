//! Invoice fetch endpoint.

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::{owned_company, CurrentUser};
use crate::billing::assembler::assemble;
use crate::billing::render::render;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InvoiceQuery {
    pub format: Option<String>,
}

/// GET /api/v1/invoices/:id
///
/// HTML document by default, the assembled bundle verbatim with
/// `?format=json`. Absent invoice, caller without a company, and ownership
/// mismatch are all the same 404 so existence cannot leak.
pub async fn handle_get_invoice(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(invoice_id): Path<Uuid>,
    Query(query): Query<InvoiceQuery>,
) -> Result<Response, AppError> {
    let not_found = || AppError::NotFound("Invoice not found".to_string());

    let company = owned_company(&state.db, user.user_id)
        .await?
        .ok_or_else(not_found)?;

    let data = assemble(&state.db, invoice_id)
        .await?
        .ok_or_else(not_found)?;

    if data.invoice.company_id != company.id {
        return Err(not_found());
    }

    if query.format.as_deref() == Some("json") {
        Ok(Json(data).into_response())
    } else {
        Ok(Html(render(&data)).into_response())
    }
}
