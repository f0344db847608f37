//! Default product set used when no persisted catalog exists.

use shared_types::{product_id, CatalogItem};

/// The seed products, each with a freshly generated identifier.
///
/// Prices are in rupees. Order is the display order for a fresh install.
pub fn seed_items() -> Vec<CatalogItem> {
    [
        ("Laptop Computer", 49999.99, 25),
        ("Wireless Mouse", 1499.99, 100),
        ("USB Keyboard", 2499.99, 75),
        ("Monitor 24\"", 9999.99, 50),
        ("Webcam HD", 3999.99, 30),
        ("Headphones", 4499.99, 60),
        ("USB Cable", 499.99, 200),
        ("HDD 1TB", 2999.99, 40),
        ("SSD 512GB", 6499.99, 35),
        ("RAM 16GB", 7499.99, 20),
    ]
    .into_iter()
    .map(|(name, price, stock)| {
        CatalogItem::new(product_id::generate(), name.to_string(), price, stock)
    })
    .collect()
}
