//! # Conservation and Totals Properties
//!
//! Randomized operation sequences against the live session, checking the
//! invariants that must hold after *every* operation:
//!
//! - `stock + Σ(cart quantities for the item)` equals the original stock
//! - stock is never negative and `inStock == (stock > 0)`
//! - totals are order-independent and obey the tax-after-discount law

#[cfg(test)]
mod tests {
    use pos_runtime::{BillingSession, NullRenderer};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use sb_01_catalog::ProductDraft;
    use sb_04_storage::{KeyValueStore, MemoryStore};
    use shared_types::CartLine;
    use std::sync::Arc;

    const IDS: [&str; 3] = ["1000000001", "2000000002", "3000000003"];
    const STOCKS: [u32; 3] = [5, 12, 40];

    fn fixture_session() -> BillingSession {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut session = BillingSession::start(store, Box::new(NullRenderer));
        session.replace_catalog(
            IDS.iter()
                .zip(STOCKS)
                .enumerate()
                .map(|(index, (id, stock))| ProductDraft {
                    id: (*id).into(),
                    name: format!("Product {index}"),
                    price: 10.0 * (index as f64 + 1.0),
                    stock: i64::from(stock),
                })
                .collect(),
        );
        session
    }

    fn committed_total(session: &BillingSession, id: &str) -> u32 {
        let stock = session
            .catalog()
            .find(id)
            .map(|item| item.stock())
            .unwrap_or(0);
        let reserved: u32 = session
            .cart()
            .lines()
            .iter()
            .filter(|line| line.id.as_deref() == Some(id))
            .map(|line| line.quantity)
            .sum();
        stock + reserved
    }

    fn assert_invariants(session: &BillingSession) {
        for (id, original) in IDS.iter().zip(STOCKS) {
            assert_eq!(
                committed_total(session, id),
                original,
                "conservation broken for {id}"
            );
            let item = session.catalog().find(id).expect("fixture item");
            assert_eq!(item.in_stock(), item.stock() > 0, "flag desync for {id}");
        }
        for line in session.cart().lines() {
            assert!(line.quantity >= 1, "zero-quantity line survived");
        }
    }

    #[test]
    fn test_conservation_over_random_operation_sequences() {
        for seed in 0..8u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut session = fixture_session();
            assert_invariants(&session);

            for _ in 0..200 {
                match rng.gen_range(0..10) {
                    // Adds dominate; failures (rejections) are expected
                    // and must leave state untouched.
                    0..=4 => {
                        let id = IDS[rng.gen_range(0..IDS.len())];
                        let quantity = rng.gen_range(-1..8);
                        let _ = session.add_to_cart(id, quantity);
                    }
                    5..=6 => {
                        let index = rng.gen_range(0..4);
                        let quantity = rng.gen_range(-1..50);
                        let _ = session.edit_cart_line(index, quantity);
                    }
                    7 => {
                        let index = rng.gen_range(0..4);
                        let _ = session.remove_cart_line(index);
                    }
                    8 => {
                        session.set_discount_rate(rng.gen_range(-10.0..120.0));
                        session.set_tax_rate(rng.gen_range(-10.0..120.0));
                    }
                    _ => {
                        session.clear_bill();
                    }
                }
                assert_invariants(&session);
            }
        }
    }

    #[test]
    fn test_rates_always_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = fixture_session();

        for _ in 0..100 {
            session.set_discount_rate(rng.gen_range(-500.0..500.0));
            session.set_tax_rate(rng.gen_range(-500.0..500.0));
            assert!((0.0..=100.0).contains(&session.cart().discount_rate()));
            assert!((0.0..=100.0).contains(&session.cart().tax_rate()));
        }
    }

    #[test]
    fn test_totals_order_independent() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut lines: Vec<CartLine> = (0..6)
            .map(|index| CartLine {
                id: None,
                name: format!("Line {index}"),
                price: rng.gen_range(0.5..500.0),
                quantity: rng.gen_range(1..20),
            })
            .collect();

        let reference = sb_03_totals::compute(&lines, 12.5, 18.0);
        for _ in 0..10 {
            // Fisher-Yates shuffle.
            for i in (1..lines.len()).rev() {
                lines.swap(i, rng.gen_range(0..=i));
            }
            let totals = sb_03_totals::compute(&lines, 12.5, 18.0);
            assert!((totals.subtotal - reference.subtotal).abs() < 1e-6);
            assert!((totals.discount_amount - reference.discount_amount).abs() < 1e-6);
            assert!((totals.discounted_total - reference.discounted_total).abs() < 1e-6);
            assert!((totals.tax_amount - reference.tax_amount).abs() < 1e-6);
            assert!((totals.final_total - reference.final_total).abs() < 1e-6);
        }
    }

    #[test]
    fn test_tax_after_discount_law() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let lines = vec![CartLine {
                id: None,
                name: "X".into(),
                price: rng.gen_range(0.01..10_000.0),
                quantity: rng.gen_range(1..100),
            }];
            let discount = rng.gen_range(0.0..=100.0);
            let tax = rng.gen_range(0.0..=100.0);

            let totals = sb_03_totals::compute(&lines, discount, tax);
            let subtotal = totals.subtotal;
            let expected = (subtotal - subtotal * discount / 100.0) * (1.0 + tax / 100.0);
            assert!(
                (totals.final_total - expected).abs() < 1e-6,
                "law broken: discount {discount}, tax {tax}"
            );
        }
    }
}
