//! Invoice totals derivation.

use shared_types::{round_display, CartLine, Money};

/// The five derived display values for an invoice.
///
/// Full precision; call [`InvoiceTotals::rounded`] for presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InvoiceTotals {
    /// Sum of `quantity * price` over all lines.
    pub subtotal: Money,
    /// `subtotal * discountRate / 100`.
    pub discount_amount: Money,
    /// `subtotal - discountAmount`, the tax base.
    pub discounted_total: Money,
    /// `discountedTotal * taxRate / 100` (tax after discount).
    pub tax_amount: Money,
    /// `discountedTotal + taxAmount`.
    pub final_total: Money,
}

impl InvoiceTotals {
    /// A copy with every field rounded to 2 decimal places for display.
    pub fn rounded(&self) -> Self {
        Self {
            subtotal: round_display(self.subtotal),
            discount_amount: round_display(self.discount_amount),
            discounted_total: round_display(self.discounted_total),
            tax_amount: round_display(self.tax_amount),
            final_total: round_display(self.final_total),
        }
    }
}

/// Computes the invoice totals from cart lines and the two rates.
///
/// Precondition (validated upstream, not re-checked here): both rates are
/// already clamped to `[0, 100]`.
pub fn compute(lines: &[CartLine], discount_rate: f64, tax_rate: f64) -> InvoiceTotals {
    let subtotal: Money = lines.iter().map(CartLine::line_total).sum();
    let discount_amount = subtotal * discount_rate / 100.0;
    let discounted_total = subtotal - discount_amount;
    let tax_amount = discounted_total * tax_rate / 100.0;
    let final_total = discounted_total + tax_amount;

    InvoiceTotals {
        subtotal,
        discount_amount,
        discounted_total,
        tax_amount,
        final_total,
    }
}
