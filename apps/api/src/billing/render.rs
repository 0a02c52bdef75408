//! Invoice HTML rendering — a pure function of the assembled bundle.
//!
//! No I/O, no hidden state: calling `render` twice on the same bundle yields
//! identical bytes. All row-derived text is escaped before interpolation.

use crate::billing::assembler::InvoiceData;

/// Renders the full invoice document.
pub fn render(data: &InvoiceData) -> String {
    let invoice = &data.invoice;
    let company = &data.company;

    let mut rows = String::new();
    for item in &data.items {
        let line_cents = i64::from(item.quantity) * item.unit_cents;
        rows.push_str(&format!(
            "        <tr>\n            <td>{}</td>\n            <td class=\"num\">{}</td>\n            <td class=\"num\">{}</td>\n            <td class=\"num\">{}</td>\n        </tr>\n",
            escape(&item.description),
            item.quantity,
            format_cents(item.unit_cents, &invoice.currency),
            format_cents(line_cents, &invoice.currency),
        ));
    }

    let job_line = match &data.job {
        Some(job) => format!(
            "    <p class=\"meta\">For posting: {}</p>\n",
            escape(&job.title)
        ),
        None => String::new(),
    };

    let payment_line = match &data.payment {
        Some(p) => format!(
            "    <p class=\"meta\">Paid {} via {}{}</p>\n",
            p.paid_at.format("%B %d, %Y"),
            escape(&p.method),
            match &p.reference {
                Some(r) => format!(" (ref {})", escape(r)),
                None => String::new(),
            },
        ),
        None => String::new(),
    };

    let due_line = match &invoice.due_at {
        Some(due) => format!(
            "    <p class=\"meta\">Due {}</p>\n",
            due.format("%B %d, %Y")
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Invoice {number}</title>
    <style>
        body {{ font-family: Arial, sans-serif; color: #222; margin: 0 auto; max-width: 640px; padding: 24px; }}
        h1 {{ font-size: 20px; }}
        table {{ width: 100%; border-collapse: collapse; margin-top: 16px; }}
        th, td {{ text-align: left; padding: 6px 8px; border-bottom: 1px solid #ddd; }}
        td.num, th.num {{ text-align: right; }}
        .totals td {{ border-bottom: none; font-weight: bold; }}
        .meta {{ color: #555; font-size: 13px; }}
        .status {{ text-transform: uppercase; letter-spacing: 1px; font-size: 12px; color: #555; }}
    </style>
</head>
<body>
    <h1>Invoice {number}</h1>
    <p class="status">{status}</p>
    <p class="meta">Issued {issued}</p>
{due_line}    <h2>{company_name}</h2>
    <p class="meta">{company_email}</p>
{job_line}    <table>
        <tr>
            <th>Description</th>
            <th class="num">Qty</th>
            <th class="num">Unit</th>
            <th class="num">Amount</th>
        </tr>
{rows}        <tr class="totals">
            <td colspan="3">Subtotal</td>
            <td class="num">{subtotal}</td>
        </tr>
        <tr class="totals">
            <td colspan="3">Tax</td>
            <td class="num">{tax}</td>
        </tr>
        <tr class="totals">
            <td colspan="3">Total</td>
            <td class="num">{total}</td>
        </tr>
    </table>
{payment_line}</body>
</html>
"#,
        number = escape(&invoice.number),
        status = escape(&invoice.status),
        issued = invoice.issued_at.format("%B %d, %Y"),
        due_line = due_line,
        company_name = escape(&company.name),
        company_email = escape(&company.email),
        job_line = job_line,
        rows = rows,
        subtotal = format_cents(data.subtotal_cents, &invoice.currency),
        tax = format_cents(invoice.tax_cents, &invoice.currency),
        total = format_cents(data.total_cents, &invoice.currency),
        payment_line = payment_line,
    )
}

/// Formats integer cents for display. USD gets the dollar sign; anything
/// else is prefixed with its currency code.
pub fn format_cents(cents: i64, currency: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let units = abs / 100;
    let rem = abs % 100;
    if currency.eq_ignore_ascii_case("usd") {
        format!("{sign}${units}.{rem:02}")
    } else {
        format!("{sign}{currency} {units}.{rem:02}")
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::billing::{InvoiceItemRow, InvoiceRow, PaymentRow};
    use crate::models::company::CompanyRow;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn sample_data() -> InvoiceData {
        let invoice_id = Uuid::new_v4();
        let company_id = Uuid::new_v4();
        let issued = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();

        let items = vec![
            InvoiceItemRow {
                id: Uuid::new_v4(),
                invoice_id,
                description: "Featured job posting".to_string(),
                quantity: 2,
                unit_cents: 4900,
                position: 0,
            },
            InvoiceItemRow {
                id: Uuid::new_v4(),
                invoice_id,
                description: "Team seat <extra>".to_string(),
                quantity: 1,
                unit_cents: 1500,
                position: 1,
            },
        ];
        let subtotal_cents: i64 = 2 * 4900 + 1500;

        InvoiceData {
            invoice: InvoiceRow {
                id: invoice_id,
                company_id,
                job_id: None,
                number: "INV-2025-0042".to_string(),
                status: "issued".to_string(),
                currency: "USD".to_string(),
                tax_cents: 890,
                issued_at: issued,
                due_at: None,
                created_at: issued,
            },
            company: CompanyRow {
                id: company_id,
                owner_id: Uuid::new_v4(),
                name: "Smith & Sons".to_string(),
                email: "billing@smith.test".to_string(),
                logo_url: None,
                website: None,
                description: None,
                size: None,
                industry: None,
                location: None,
                created_at: issued,
                updated_at: issued,
            },
            job: None,
            items,
            payment: Some(PaymentRow {
                id: Uuid::new_v4(),
                invoice_id,
                method: "card".to_string(),
                reference: Some("ch_123".to_string()),
                amount_cents: subtotal_cents + 890,
                paid_at: issued,
            }),
            subtotal_cents,
            total_cents: subtotal_cents + 890,
        }
    }

    #[test]
    fn test_render_contains_number_company_and_items() {
        let html = render(&sample_data());
        assert!(html.contains("INV-2025-0042"));
        assert!(html.contains("Smith &amp; Sons"));
        assert!(html.contains("Featured job posting"));
        assert!(html.contains("Team seat &lt;extra&gt;"));
    }

    #[test]
    fn test_render_shows_monetary_totals() {
        let html = render(&sample_data());
        assert!(html.contains("$113.00")); // subtotal
        assert!(html.contains("$8.90")); // tax
        assert!(html.contains("$121.90")); // total
    }

    #[test]
    fn test_render_is_idempotent() {
        let data = sample_data();
        assert_eq!(render(&data), render(&data));
    }

    #[test]
    fn test_render_escapes_row_text() {
        let mut data = sample_data();
        data.company.name = "<script>alert(1)</script>".to_string();
        let html = render(&data);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_format_cents_usd_and_other() {
        assert_eq!(format_cents(12345, "USD"), "$123.45");
        assert_eq!(format_cents(5, "USD"), "$0.05");
        assert_eq!(format_cents(-250, "USD"), "-$2.50");
        assert_eq!(format_cents(9900, "EUR"), "EUR 99.00");
    }
}
