//! Deal-state derivation for the snapshot endpoint.
//!
//! Given the most recent MOU and Invoice for a deal (and whether a receipt
//! exists for that invoice), projects a human-readable status per document
//! plus a "next step" hint. Pure functions; the handler supplies the rows.

use serde::Serialize;

/// Projected status of a single document (MOU or Invoice) within a deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentStatus {
    /// Capitalized lifecycle status, e.g. `"Draft"`, `"Sent"`, `"Signed"`.
    pub status: String,
    /// Client-facing link path built from the document's token, when one exists.
    pub link: Option<String>,
}

/// Hint shown while no MOU has been generated yet.
pub const HINT_SEND_SIGN_LINK: &str = "Next: Generate sign link and send to client.";
/// Hint for a signed MOU with a draft invoice. Stored invoices are only ever
/// created with status `sent`, so in practice this fires only while no
/// invoice exists at all (a missing invoice projects as `"Draft"`).
pub const HINT_SEND_INVOICE: &str = "Next: Generate invoice and send.";
/// Hint for a paid invoice that has no receipt yet.
pub const HINT_SEND_RECEIPT: &str = "Next: Generate receipt and send.";

/// Project a document's stored status and token into a [`DocumentStatus`].
///
/// A missing document reads as `"Draft"` with no link. An existing document
/// gets its stored status capitalized and a link of the form
/// `{link_prefix}/{token}`.
pub fn document_status(
    status: Option<&str>,
    token: Option<&str>,
    link_prefix: &str,
) -> DocumentStatus {
    match status {
        None => DocumentStatus {
            status: "Draft".to_string(),
            link: None,
        },
        Some(s) => DocumentStatus {
            status: capitalize(s),
            link: token.map(|t| format!("{link_prefix}/{t}")),
        },
    }
}

/// Derive the "next step" hint from the projected statuses.
///
/// Rules are evaluated in order; the first match wins:
/// 1. MOU draft -> send the sign link.
/// 2. MOU signed and invoice draft -> send the invoice.
/// 3. Invoice paid and no receipt -> send the receipt.
/// 4. Otherwise no actionable step (empty hint).
pub fn next_step(mou_status: &str, invoice_status: &str, receipt_available: bool) -> &'static str {
    let mou = mou_status.to_lowercase();
    let invoice = invoice_status.to_lowercase();

    if mou == "draft" {
        HINT_SEND_SIGN_LINK
    } else if mou == "signed" && invoice == "draft" {
        HINT_SEND_INVOICE
    } else if invoice == "paid" && !receipt_available {
        HINT_SEND_RECEIPT
    } else {
        ""
    }
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}
