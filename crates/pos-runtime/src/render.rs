//! Rendering collaborator port.
//!
//! The renderer owns no business logic: after every mutation it receives
//! the filtered catalog view, the filtered cart view, and the five
//! computed totals, and may not mutate any of them.

use sb_03_totals::InvoiceTotals;
use shared_types::{CartLine, CatalogItem};

/// Catalog rows shown at once; the rest stay reachable via search.
pub const CATALOG_DISPLAY_LIMIT: usize = 7;

/// What the rendering collaborator sees after a mutation.
#[derive(Debug, Clone, Default)]
pub struct ViewSnapshot {
    /// Catalog view, already filtered by the catalog query.
    pub catalog: Vec<CatalogItem>,
    /// Cart view, already filtered by the cart query.
    pub cart: Vec<CartLine>,
    /// Totals over the full (unfiltered) cart.
    pub totals: InvoiceTotals,
}

/// Rendering collaborator.
pub trait RenderSink {
    /// Called after every mutation with a fresh snapshot.
    fn render(&mut self, view: &ViewSnapshot);
}

/// Renderer that discards snapshots (tests, headless runs).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl RenderSink for NullRenderer {
    fn render(&mut self, _view: &ViewSnapshot) {}
}

/// Console table renderer.
#[derive(Debug, Clone)]
pub struct ConsoleRenderer {
    currency: String,
}

impl ConsoleRenderer {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency, amount)
    }
}

impl RenderSink for ConsoleRenderer {
    fn render(&mut self, view: &ViewSnapshot) {
        println!();
        println!("--- Catalog ---");
        if view.catalog.is_empty() {
            println!("  (no matching products)");
        }
        for item in view.catalog.iter().take(CATALOG_DISPLAY_LIMIT) {
            let badge = if item.in_stock() { "" } else { "  [Out of Stock]" };
            println!(
                "  {}  {:<20} {:>12}  stock {:>4}{}",
                item.id,
                item.name,
                self.money(item.price),
                item.stock(),
                badge
            );
        }
        if view.catalog.len() > CATALOG_DISPLAY_LIMIT {
            println!(
                "  ... {} more (narrow with `catalog <query>`)",
                view.catalog.len() - CATALOG_DISPLAY_LIMIT
            );
        }

        println!("--- Bill ---");
        if view.cart.is_empty() {
            println!("  (no products added)");
        }
        for (index, line) in view.cart.iter().enumerate() {
            println!(
                "  {:>2}. {:<20} x{:<4} @ {:>10}  = {}",
                index,
                line.name,
                line.quantity,
                self.money(line.price),
                self.money(shared_types::round_display(line.line_total()))
            );
        }

        let totals = view.totals.rounded();
        println!("--- Totals ---");
        println!("  Subtotal:         {}", self.money(totals.subtotal));
        if totals.discount_amount > 0.0 {
            println!("  Discount:        -{}", self.money(totals.discount_amount));
        } else {
            println!("  Discount:         {}", self.money(totals.discount_amount));
        }
        println!("  After discount:   {}", self.money(totals.discounted_total));
        if totals.tax_amount > 0.0 {
            println!("  Tax:             +{}", self.money(totals.tax_amount));
        } else {
            println!("  Tax:              {}", self.money(totals.tax_amount));
        }
        println!("  Final total:      {}", self.money(totals.final_total));
    }
}
