//! Sample product catalog for the demo panel.
//!
//! The components themselves never own data; this module supplies the row
//! records and the metrics summary the demo binary feeds into them.

use crate::ui::components::smart_alerts::MetricsSummary;
use crate::ui::components::table::RowRecord;

/// One product in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price_cents: u32,
    pub on_hand: u32,
}

impl Product {
    #[must_use]
    pub fn new(sku: &str, name: &str, category: &str, price_cents: u32, on_hand: u32) -> Self {
        Self {
            sku: sku.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price_cents,
            on_hand,
        }
    }

    /// Price formatted for display, e.g. "$12.50"
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

impl RowRecord for Product {
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "sku" => Some(self.sku.clone()),
            "name" => Some(self.name.clone()),
            "category" => Some(self.category.clone()),
            "price" => Some(self.display_price()),
            "on_hand" => Some(self.on_hand.to_string()),
            _ => None,
        }
    }
}

/// Sample data rendered by the demo panel
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("SKU-1001", "Espresso Beans 1kg", "Coffee", 1850, 24),
        Product::new("SKU-1002", "Oat Milk 1L", "Dairy Alternatives", 320, 3),
        Product::new("SKU-1003", "Paper Cups 8oz (50)", "Supplies", 499, 0),
        Product::new("SKU-1004", "Cold Brew Bottle", "Coffee", 650, 12),
        Product::new("SKU-1005", "Cleaning Tablets", "Supplies", 1275, 2),
        Product::new("SKU-1006", "Ceramic Mug", "Merchandise", 1400, 31),
        Product::new("SKU-1007", "Gift Card $25", "Merchandise", 2500, 0),
    ]
}

/// Summarize stock alerts for the dashboard widgets.
///
/// Low stock counts products at or below the threshold but not out of
/// stock; out of stock is its own bucket.
#[must_use]
pub fn summarize(products: &[Product], low_stock_threshold: u32) -> MetricsSummary {
    let out_of_stock_count = products.iter().filter(|p| p.on_hand == 0).count() as u32;
    let low_stock_alerts = products
        .iter()
        .filter(|p| p.on_hand > 0 && p.on_hand <= low_stock_threshold)
        .count() as u32;

    MetricsSummary {
        low_stock_alerts,
        out_of_stock_count,
    }
}
