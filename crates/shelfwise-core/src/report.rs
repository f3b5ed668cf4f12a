//! # Catalog Reports
//!
//! Aggregates over the whole collection: order and revenue totals, the
//! low-stock list, categories, and the per-period and per-category figures
//! shown on the revenue analysis screen.
//!
//! View controls never apply here; every report covers the full collection
//! in collection order.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

/// Units and revenue for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategorySummary {
    pub category: String,
    /// Number of products in the category.
    pub products: usize,
    #[ts(type = "number")]
    pub units: u64,
    pub revenue: f64,
}

/// Sum of every product's sales window. Products without sales add 0.
pub fn total_orders(products: &[Product]) -> u64 {
    products.iter().map(Product::units_sold).sum()
}

/// Sum over products of units sold times price.
pub fn total_revenue(products: &[Product]) -> f64 {
    products.iter().map(Product::revenue).sum()
}

/// Products under the low-stock threshold, in collection order.
pub fn low_stock_products(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.is_low_stock()).collect()
}

/// Distinct categories in order of first appearance.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products {
        if !categories.iter().any(|c| c == product.category()) {
            categories.push(product.category().to_string());
        }
    }
    categories
}

/// Units sold per period across all products.
///
/// Slot `i` sums slot `i` of every sales window. The result is as long as
/// the longest window; shorter windows contribute nothing past their end.
///
/// ## Example
/// ```rust
/// use shelfwise_core::report::sales_by_period;
/// use shelfwise_core::seed_products;
///
/// assert_eq!(sales_by_period(&seed_products()), vec![5, 3, 2, 1, 1, 1, 1]);
/// ```
pub fn sales_by_period(products: &[Product]) -> Vec<u64> {
    let mut totals: Vec<u64> = Vec::new();
    for sales in products.iter().filter_map(|p| p.sales.as_deref()) {
        if sales.len() > totals.len() {
            totals.resize(sales.len(), 0);
        }
        for (slot, &units) in totals.iter_mut().zip(sales) {
            *slot += u64::from(units);
        }
    }
    totals
}

/// Per-category figures, one entry per category in the given order.
///
/// Categories with no products still get an entry with zero figures.
pub fn revenue_by_category(products: &[Product], categories: &[String]) -> Vec<CategorySummary> {
    categories
        .iter()
        .map(|category| {
            let members = products.iter().filter(|p| p.category() == category.as_str());
            let mut summary = CategorySummary {
                category: category.clone(),
                products: 0,
                units: 0,
                revenue: 0.0,
            };
            for product in members {
                summary.products += 1;
                summary.units += product.units_sold();
                summary.revenue += product.revenue();
            }
            summary
        })
        .collect()
}
