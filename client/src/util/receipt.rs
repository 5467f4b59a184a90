//! Plain-text donation receipts and their browser download.
//!
//! TRADE-OFFS
//! ==========
//! Receipts are generated locally from the donation record the API returned;
//! nothing is signed or stored server-side. Download is browser-only and a
//! no-op during SSR.

#[cfg(test)]
#[path = "receipt_test.rs"]
mod receipt_test;

use super::format::{date_label, format_usd};
use crate::net::types::Donation;

/// Receipt body for `donation` made by `donor_name`.
#[must_use]
pub fn receipt_text(donor_name: &str, donation: &Donation) -> String {
    let mut lines = vec![
        "--- DONATIONHUB RECEIPT ---".to_owned(),
        format!("Receipt: {}", donation.id.as_deref().unwrap_or("pending")),
        format!("Date: {}", date_label(donation.created_at.as_deref())),
        format!("Donor: {donor_name}"),
        format!("Amount: {}", format_usd(donation.amount)),
    ];
    if let Some(kind) = donation.kind {
        lines.push(format!("Type: {}", kind.label()));
    }
    lines.push(format!("Category: {}", donation.category.as_deref().unwrap_or("General")));
    if let Some(title) = donation.campaign.as_ref().and_then(|c| c.title()) {
        lines.push(format!("Campaign: {title}"));
    }
    lines.push(format!("Status: {}", donation.status.label()));
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Download filename: `Receipt_<id>.txt`, or `Receipt_new.txt` without an id.
#[must_use]
pub fn receipt_filename(donation: &Donation) -> String {
    format!("Receipt_{}.txt", donation.id.as_deref().unwrap_or("new"))
}

/// Offer the receipt to the browser as a `.txt` download.
pub fn download_receipt(donor_name: &str, donation: &Donation) {
    #[cfg(feature = "hydrate")]
    {
        let text = receipt_text(donor_name, donation);
        let filename = receipt_filename(donation);
        if let Err(err) = trigger_download(&filename, &text) {
            log::warn!("receipt download failed: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (donor_name, donation);
    }
}

#[cfg(feature = "hydrate")]
fn trigger_download(filename: &str, text: &str) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = document.create_element("a")?.dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)
}
