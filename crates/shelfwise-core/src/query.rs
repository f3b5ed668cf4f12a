//! # Product Queries
//!
//! Filtering, search and sorting of the product list.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    filter_products(products, controls)                  │
//! │                                                                         │
//! │  products ──► category ──► search ──► min price ──► max price          │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │                              result ◄── sort ◄── in stock               │
//! │                                                                         │
//! │  Stage order is fixed. Sorting is stable, so ties keep the order they   │
//! │  had in the collection.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here borrows the collection and returns references; the
//! collection itself is never reordered or modified.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use tracing::warn;

use crate::types::{Product, SortField, ViewControls};

// =============================================================================
// Filtering
// =============================================================================

/// Applies the view controls to `products` and returns the visible list.
///
/// ## Stages
/// 1. `selected_category`: exact match on `description` (skipped when empty)
/// 2. `search`: case-insensitive substring of `name` OR `description`
/// 3. `filter_min_price`: `price >= min` when the text holds a number
/// 4. `filter_max_price`: `price <= max` when the text holds a number
/// 5. `filter_in_stock`: `stock > 0`
/// 6. sort by `sort_by`, reversed when `sort_asc` is false
///
/// ## Example
/// ```rust
/// use shelfwise_core::query::filter_products;
/// use shelfwise_core::{seed_products, ViewControls};
///
/// let products = seed_products();
/// let controls = ViewControls {
///     selected_category: "Electronics".to_string(),
///     ..ViewControls::default()
/// };
///
/// let names: Vec<&str> = filter_products(&products, &controls)
///     .iter()
///     .map(|p| p.name.as_str())
///     .collect();
/// assert_eq!(names, ["Laptop", "Phone"]);
/// ```
pub fn filter_products<'a>(products: &'a [Product], controls: &ViewControls) -> Vec<&'a Product> {
    let category = controls.selected_category.as_str();
    let needle = controls.search.to_lowercase();
    let min_price = parse_price_bound(&controls.filter_min_price);
    let max_price = parse_price_bound(&controls.filter_max_price);

    let mut list: Vec<&Product> = products
        .iter()
        .filter(|p| category.is_empty() || p.description == category)
        .filter(|p| needle.is_empty() || matches_search(p, &needle))
        .filter(|p| min_price.map_or(true, |min| p.price >= min))
        .filter(|p| max_price.map_or(true, |max| p.price <= max))
        .filter(|p| !controls.filter_in_stock || p.is_in_stock())
        .collect();

    sort_products(&mut list, controls.sort_by, controls.sort_asc);
    list
}

/// Checks a lowercased search needle against name and description.
fn matches_search(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

// =============================================================================
// Sorting
// =============================================================================

/// Stable sort of a product list by one column.
pub fn sort_products(list: &mut [&Product], field: SortField, ascending: bool) {
    let collator = TextCollator::root();
    if ascending {
        list.sort_by(|a, b| compare_by(&collator, field, a, b));
    } else {
        list.sort_by(|a, b| compare_by(&collator, field, b, a));
    }
}

/// Compares two products on a single column.
pub fn compare_by(collator: &TextCollator, field: SortField, a: &Product, b: &Product) -> Ordering {
    match field {
        SortField::Name => collator.compare(&a.name, &b.name),
        SortField::Description => collator.compare(&a.description, &b.description),
        SortField::Stock => a.stock.cmp(&b.stock),
        SortField::Price => a.price.total_cmp(&b.price),
    }
}

/// Unicode collation for the text columns.
///
/// Uses the root locale at tertiary strength: base letters first, then
/// accents, then case with lowercase first. So `"eclair"` < `"Éclair"` <
/// `"Zebra"`. Strings the collator cannot tell apart compare `Equal`,
/// leaving them in collection order under a stable sort.
pub struct TextCollator {
    collator: Option<Collator>,
}

impl TextCollator {
    /// Loads the root collation from the compiled-in data.
    pub fn root() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);

        let collator = match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(err) => {
                warn!(error = %err, "Collation data unavailable, sorting text by code point");
                None
            }
        };
        TextCollator { collator }
    }

    /// Orders two strings.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}

/// Orders two strings with the root collation.
///
/// Builds a collator per call; sort through [`sort_products`] or a shared
/// [`TextCollator`] when comparing many pairs.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    TextCollator::root().compare(a, b)
}

// =============================================================================
// Price Bounds
// =============================================================================

/// Reads a price bound typed into a filter box.
///
/// Leading whitespace is skipped and the longest leading decimal number is
/// used, so `"15"`, `" 15"` and `"15 EUR"` all give `15.0`. A signed or
/// unsigned `Infinity` prefix gives an infinite bound. Empty text or text
/// that does not start with a number gives `None`, meaning the bound is not
/// applied.
///
/// ## Example
/// ```rust
/// use shelfwise_core::query::parse_price_bound;
///
/// assert_eq!(parse_price_bound("19.5"), Some(19.5));
/// assert_eq!(parse_price_bound("12abc"), Some(12.0));
/// assert_eq!(parse_price_bound(""), None);
/// assert_eq!(parse_price_bound("abc"), None);
/// ```
pub fn parse_price_bound(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let number = leading_number(text)?;
    number.parse::<f64>().ok().filter(|value| !value.is_nan())
}

const INFINITY: &str = "Infinity";

/// Longest prefix of `text` shaped like `[+-]digits[.digits][e[+-]digits]`
/// or `[+-]Infinity`.
fn leading_number(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if text[sign..].starts_with(INFINITY) {
        return Some(&text[..sign + INFINITY.len()]);
    }

    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = sign;

    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    Some(&text[..end])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    fn product(id: u32, name: &str, category: &str, price: f64, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: category.to_string(),
            price,
            stock,
            image: String::new(),
            sales: None,
        }
    }

    fn ids(list: &[&Product]) -> Vec<u32> {
        list.iter().map(|p| p.id.get()).collect()
    }

    fn scenario() -> Vec<Product> {
        let mut b = product(1, "B", "X", 10.0, 0);
        b.sales = Some(vec![1, 1]);
        let mut a = product(2, "A", "X", 20.0, 5);
        a.sales = Some(vec![]);
        vec![b, a]
    }

    #[test]
    fn test_in_stock_filter() {
        let products = scenario();
        let controls = ViewControls {
            filter_in_stock: true,
            ..ViewControls::default()
        };
        assert_eq!(ids(&filter_products(&products, &controls)), vec![2]);
    }

    #[test]
    fn test_min_price_with_empty_max() {
        let products = scenario();
        let controls = ViewControls {
            filter_min_price: "15".to_string(),
            filter_max_price: String::new(),
            ..ViewControls::default()
        };
        assert_eq!(ids(&filter_products(&products, &controls)), vec![2]);
    }

    #[test]
    fn test_unparseable_bounds_are_ignored() {
        let products = scenario();
        let controls = ViewControls {
            filter_min_price: "cheap".to_string(),
            filter_max_price: "-".to_string(),
            ..ViewControls::default()
        };
        assert_eq!(filter_products(&products, &controls).len(), 2);
    }

    #[test]
    fn test_max_price_bound_is_inclusive() {
        let products = scenario();
        let controls = ViewControls {
            filter_max_price: "10".to_string(),
            ..ViewControls::default()
        };
        assert_eq!(ids(&filter_products(&products, &controls)), vec![1]);
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let products = vec![
            product(1, "Laptop", "Electronics", 1200.0, 3),
            product(2, "Book", "Books", 40.0, 10),
            product(3, "E-reader", "Gadgets", 90.0, 1),
        ];
        let controls = ViewControls {
            search: "ELEC".to_string(),
            ..ViewControls::default()
        };
        assert_eq!(ids(&filter_products(&products, &controls)), vec![1]);

        let controls = ViewControls {
            search: "book".to_string(),
            ..ViewControls::default()
        };
        assert_eq!(ids(&filter_products(&products, &controls)), vec![2]);
    }

    #[test]
    fn test_category_is_exact_match() {
        let products = vec![
            product(1, "Laptop", "Electronics", 1200.0, 3),
            product(2, "Cable", "electronics", 5.0, 30),
        ];
        let controls = ViewControls {
            selected_category: "Electronics".to_string(),
            ..ViewControls::default()
        };
        assert_eq!(ids(&filter_products(&products, &controls)), vec![1]);
    }

    #[test]
    fn test_sort_descending_keeps_ties_in_collection_order() {
        let products = vec![
            product(1, "A", "X", 10.0, 1),
            product(2, "B", "X", 20.0, 1),
            product(3, "C", "X", 10.0, 1),
        ];
        let mut controls = ViewControls {
            sort_by: SortField::Price,
            ..ViewControls::default()
        };
        assert_eq!(ids(&filter_products(&products, &controls)), vec![1, 3, 2]);

        controls.sort_asc = false;
        assert_eq!(ids(&filter_products(&products, &controls)), vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_by_stock_and_description() {
        let products = vec![
            product(1, "Laptop", "Electronics", 1200.0, 3),
            product(2, "Book", "Books", 40.0, 10),
            product(3, "Shirt", "Clothing", 25.0, 2),
        ];
        let controls = ViewControls {
            sort_by: SortField::Stock,
            ..ViewControls::default()
        };
        assert_eq!(ids(&filter_products(&products, &controls)), vec![3, 1, 2]);

        let controls = ViewControls {
            sort_by: SortField::Description,
            ..ViewControls::default()
        };
        assert_eq!(ids(&filter_products(&products, &controls)), vec![2, 3, 1]);
    }

    #[test]
    fn test_filtering_is_idempotent_and_non_mutating() {
        let products = vec![
            product(1, "b", "X", 10.0, 1),
            product(2, "a", "X", 20.0, 0),
        ];
        let before = products.clone();
        let controls = ViewControls::default();

        let first = ids(&filter_products(&products, &controls));
        let second = ids(&filter_products(&products, &controls));
        assert_eq!(first, second);
        assert_eq!(first, vec![2, 1]);
        assert_eq!(products, before);
    }

    #[test]
    fn test_locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Phone", "phone"), Ordering::Greater);
        assert_eq!(locale_compare("Book", "Book"), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_name_places_accents_with_base_letter() {
        let products = vec![
            product(1, "Zebra", "X", 10.0, 1),
            product(2, "Éclair", "X", 10.0, 1),
            product(3, "eclair", "X", 10.0, 1),
            product(4, "Äpfel", "X", 10.0, 1),
        ];
        let mut controls = ViewControls::default();
        assert_eq!(ids(&filter_products(&products, &controls)), vec![4, 3, 2, 1]);

        controls.sort_asc = false;
        assert_eq!(ids(&filter_products(&products, &controls)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_by_name_keeps_equal_names_in_collection_order() {
        let products = vec![
            product(1, "Mug", "X", 10.0, 1),
            product(2, "Lamp", "X", 10.0, 1),
            product(3, "Mug", "X", 20.0, 1),
        ];
        let controls = ViewControls::default();
        assert_eq!(ids(&filter_products(&products, &controls)), vec![2, 1, 3]);
    }

    #[test]
    fn test_parse_price_bound() {
        assert_eq!(parse_price_bound("15"), Some(15.0));
        assert_eq!(parse_price_bound("  7.25"), Some(7.25));
        assert_eq!(parse_price_bound(".5"), Some(0.5));
        assert_eq!(parse_price_bound("-3"), Some(-3.0));
        assert_eq!(parse_price_bound("1e2x"), Some(100.0));
        assert_eq!(parse_price_bound("4e"), Some(4.0));
        assert_eq!(parse_price_bound("."), None);
        assert_eq!(parse_price_bound("+"), None);
        assert_eq!(parse_price_bound("NaN"), None);
        assert_eq!(parse_price_bound(""), None);
    }

    #[test]
    fn test_parse_price_bound_infinity() {
        assert_eq!(parse_price_bound("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_price_bound(" -Infinity!"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_price_bound("+Infinityx"), Some(f64::INFINITY));
        assert_eq!(parse_price_bound("infinity"), None);
        assert_eq!(parse_price_bound("Inf"), None);
    }

    #[test]
    fn test_infinite_bounds_filter_like_numbers() {
        let products = scenario();
        let controls = ViewControls {
            filter_min_price: "Infinity".to_string(),
            ..ViewControls::default()
        };
        assert!(filter_products(&products, &controls).is_empty());

        let controls = ViewControls {
            filter_max_price: "Infinity".to_string(),
            ..ViewControls::default()
        };
        assert_eq!(filter_products(&products, &controls).len(), 2);
    }
}
