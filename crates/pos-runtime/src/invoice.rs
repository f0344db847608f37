//! Print/export collaborator: plain-text invoice rendering.
//!
//! Consumes an already-computed snapshot; performs no business logic of
//! its own.

use crate::config::PosConfig;
use crate::render::ViewSnapshot;
use shared_types::round_display;

/// Renders the current bill as a printable invoice.
///
/// The snapshot's cart view should be unfiltered: the invoice always
/// shows every line.
pub fn render_invoice(config: &PosConfig, view: &ViewSnapshot) -> String {
    let currency = &config.currency;
    let date = chrono::Local::now().format("%B %e, %Y");
    let totals = view.totals.rounded();

    let mut out = String::new();
    out.push_str(&format!("{:=^52}\n", ""));
    out.push_str(&format!("{:^52}\n", config.store_name));
    out.push_str(&format!("{:^52}\n", format!("Date: {date}")));
    out.push_str(&format!("{:=^52}\n", ""));

    if view.cart.is_empty() {
        out.push_str("(no products added)\n");
    }
    for line in &view.cart {
        out.push_str(&format!(
            "{:<24} x{:<4} @{:>9.2} {:>10}\n",
            line.name,
            line.quantity,
            line.price,
            format!("{currency}{:.2}", round_display(line.line_total()))
        ));
    }

    out.push_str(&format!("{:-^52}\n", ""));
    out.push_str(&format!("{:<32} {currency}{:.2}\n", "Subtotal", totals.subtotal));
    out.push_str(&format!(
        "{:<32} -{currency}{:.2}\n",
        "Discount", totals.discount_amount
    ));
    out.push_str(&format!(
        "{:<32} {currency}{:.2}\n",
        "After discount", totals.discounted_total
    ));
    out.push_str(&format!("{:<32} +{currency}{:.2}\n", "Tax", totals.tax_amount));
    out.push_str(&format!("{:=^52}\n", ""));
    out.push_str(&format!(
        "{:<32} {currency}{:.2}\n",
        "TOTAL", totals.final_total
    ));

    out
}
