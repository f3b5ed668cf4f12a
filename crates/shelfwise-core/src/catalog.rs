//! # Catalog State Engine
//!
//! Owns the product collection, the derived category list, the view
//! controls, and the persistence backend.
//!
//! ## Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Operations                                   │
//! │                                                                         │
//! │  Caller Action            Catalog Method           Saved?               │
//! │  ─────────────            ──────────────           ──────               │
//! │                                                                         │
//! │  Register product ──────► register() ────────────► yes                  │
//! │  Append product ────────► add_product() ─────────► yes                  │
//! │  Change stock ──────────► update_stock() ────────► yes (even unknown id)│
//! │  Click column header ───► set_sort() ────────────► no                   │
//! │  Type in filter box ────► controls_mut() ────────► no                   │
//! │                                                                         │
//! │  Read list / totals ────► filtered_products(), total_orders(), ...      │
//! │                           (recomputed on every call, nothing cached)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//! Persistence problems never reach the caller. A failed or unusable load
//! falls back to the seed catalog; a failed save is logged and the in-memory
//! state stays authoritative.

use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::forecast::forecast_message;
use crate::persistence::{decode_products, encode_products, Persistence};
use crate::query::filter_products;
use crate::report::{self, CategorySummary};
use crate::seed::seed_products;
use crate::types::{Product, ProductId, SortField, ViewControls};
use crate::validation::NewProduct;

/// The catalog state container.
///
/// ## Usage
/// ```rust
/// use shelfwise_core::{Catalog, MemoryPersistence, NewProduct, SortField};
///
/// let mut catalog = Catalog::load(MemoryPersistence::new());
///
/// let lamp = catalog
///     .register(NewProduct {
///         name: "Desk Lamp".to_string(),
///         description: "Home".to_string(),
///         price: 35.0,
///         stock: 2,
///         ..NewProduct::default()
///     })
///     .unwrap();
/// assert_eq!(lamp.id.get(), 5);
/// assert!(catalog.categories().iter().any(|c| c == "Home"));
///
/// catalog.set_sort(SortField::Price);
/// let cheapest = catalog.filtered_products()[0];
/// assert_eq!(cheapest.name, "Shirt");
/// ```
#[derive(Debug)]
pub struct Catalog<P: Persistence> {
    products: Vec<Product>,
    categories: Vec<String>,
    next_id: ProductId,
    controls: ViewControls,
    persistence: P,
}

impl<P: Persistence> Catalog<P> {
    /// Loads the catalog from `persistence`, falling back to the seed
    /// products when nothing usable is stored.
    pub fn load(persistence: P) -> Self {
        let products = load_products(&persistence);
        Catalog::with_products(products, persistence)
    }

    /// Builds a catalog over `products` without reading `persistence`.
    pub fn with_products(products: Vec<Product>, persistence: P) -> Self {
        let next_id = products
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(ProductId::new(1), |id| id.next());
        let categories = report::distinct_categories(&products);

        info!(
            products = products.len(),
            categories = categories.len(),
            next_id = %next_id,
            "Catalog ready"
        );

        Catalog {
            products,
            categories,
            next_id,
            controls: ViewControls::default(),
            persistence,
        }
    }

    // =========================================================================
    // State Access
    // =========================================================================

    /// All products in collection order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The id the next registered product receives.
    pub fn next_id(&self) -> ProductId {
        self.next_id
    }

    pub fn controls(&self) -> &ViewControls {
        &self.controls
    }

    /// Mutable view controls, for assigning filter and search fields.
    pub fn controls_mut(&mut self) -> &mut ViewControls {
        &mut self.controls
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Consumes the catalog, returning its backend.
    pub fn into_persistence(self) -> P {
        self.persistence
    }

    // =========================================================================
    // Derived Views
    // =========================================================================

    /// Products passing the current filters, in the current sort order.
    pub fn filtered_products(&self) -> Vec<&Product> {
        filter_products(&self.products, &self.controls)
    }

    /// Products under the low-stock threshold, ignoring view controls.
    pub fn low_stock_products(&self) -> Vec<&Product> {
        report::low_stock_products(&self.products)
    }

    /// Units sold across every product's sales window.
    pub fn total_orders(&self) -> u64 {
        report::total_orders(&self.products)
    }

    /// Units sold times price, summed over products.
    pub fn total_revenue(&self) -> f64 {
        report::total_revenue(&self.products)
    }

    /// Units sold per period across all products.
    pub fn sales_by_period(&self) -> Vec<u64> {
        report::sales_by_period(&self.products)
    }

    /// Units and revenue per category, in category order.
    pub fn revenue_by_category(&self) -> Vec<CategorySummary> {
        report::revenue_by_category(&self.products, &self.categories)
    }

    /// Depletion message for `product`, or an empty string.
    pub fn forecast(&self, product: &Product) -> String {
        forecast_message(product)
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Appends a product and saves.
    ///
    /// The caller picks the id, normally from [`Catalog::next_id`]. A new
    /// category is appended to [`Catalog::categories`].
    ///
    /// ## Errors
    /// `DuplicateProductId` if the id is taken; nothing changes or is saved.
    pub fn add_product(&mut self, product: Product) -> CoreResult<()> {
        if self.product(product.id).is_some() {
            return Err(CoreError::DuplicateProductId(product.id));
        }

        if !self.categories.iter().any(|c| c == product.category()) {
            debug!(category = %product.category(), "New category");
            self.categories.push(product.category().to_string());
        }
        if product.id >= self.next_id {
            self.next_id = product.id.next();
        }

        debug!(id = %product.id, name = %product.name, "Adding product");
        self.products.push(product);
        self.save_products();
        Ok(())
    }

    /// Validates a draft, assigns it the next id, and adds it.
    pub fn register(&mut self, draft: NewProduct) -> CoreResult<Product> {
        draft.validate()?;
        let product = draft.into_product(self.next_id);
        self.add_product(product.clone())?;
        info!(id = %product.id, name = %product.name, "Registered product");
        Ok(product)
    }

    /// Sets the stock of the product with `id`, then saves.
    ///
    /// An unknown id changes nothing but is still saved. Returns whether a
    /// product matched.
    pub fn update_stock(&mut self, id: ProductId, new_stock: u32) -> bool {
        let found = match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                debug!(id = %id, from = product.stock, to = new_stock, "Updating stock");
                product.stock = new_stock;
                true
            }
            None => {
                debug!(id = %id, "Stock update for unknown product ignored");
                false
            }
        };
        self.save_products();
        found
    }

    /// Sorts by `field`; choosing the current field again flips direction.
    pub fn set_sort(&mut self, field: SortField) {
        if self.controls.sort_by == field {
            self.controls.sort_asc = !self.controls.sort_asc;
        } else {
            self.controls.sort_by = field;
            self.controls.sort_asc = true;
        }
    }

    /// Writes the full collection to the backend. Failures are logged only.
    pub fn save_products(&mut self) {
        let serialized = match encode_products(&self.products) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!(error = %err, "Failed to serialize products");
                return;
            }
        };

        match self.persistence.save(&serialized) {
            Ok(()) => debug!(products = self.products.len(), "Saved products"),
            Err(err) => warn!(error = %err, "Failed to save products"),
        }
    }
}

/// Reads and decodes the stored collection, or returns the seed products.
fn load_products<P: Persistence>(persistence: &P) -> Vec<Product> {
    let raw = match persistence.load() {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => {
            info!("No saved products, starting from seed catalog");
            return seed_products();
        }
        Err(err) => {
            warn!(error = %err, "Failed to read saved products, using seed catalog");
            return seed_products();
        }
    };

    match decode_products(&raw) {
        Ok(products) => products,
        Err(err) => {
            warn!(error = %err, "Saved products are unreadable, using seed catalog");
            seed_products()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryPersistence;

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

    fn seeded() -> Catalog<MemoryPersistence> {
        Catalog::load(MemoryPersistence::new())
    }

    #[test]
    fn test_load_falls_back_to_seed() {
        for backend in [
            MemoryPersistence::new(),
            MemoryPersistence::new().failing_reads(),
            MemoryPersistence::with_stored("{not json"),
            MemoryPersistence::with_stored("   "),
            MemoryPersistence::with_stored("null"),
        ] {
            let catalog = Catalog::load(backend);
            assert_eq!(catalog.products(), seed_products().as_slice());
            assert_eq!(catalog.next_id(), ProductId::new(5));
            assert_eq!(catalog.categories(), ["Electronics", "Books", "Clothing"]);
        }
    }

    #[test]
    fn test_load_empty_saved_list() {
        let catalog = Catalog::load(MemoryPersistence::with_stored("[]"));
        assert!(catalog.products().is_empty());
        assert!(catalog.categories().is_empty());
        assert_eq!(catalog.next_id(), ProductId::new(1));
    }

    #[test]
    fn test_load_saved_products() {
        let saved = encode_products(&[
            product(3, "Mug", "Kitchen", 8.0, 20),
            product(11, "Kettle", "Kitchen", 30.0, 1),
        ])
        .unwrap();
        let catalog = Catalog::load(MemoryPersistence::with_stored(saved));
        assert_eq!(catalog.products().len(), 2);
        assert_eq!(catalog.next_id(), ProductId::new(12));
        assert_eq!(catalog.categories(), ["Kitchen"]);
    }

    #[test]
    fn test_add_product_updates_categories_and_saves() {
        let mut catalog = seeded();
        catalog
            .add_product(product(5, "Tablet", "Electronics", 300.0, 4))
            .unwrap();
        assert_eq!(catalog.categories().len(), 3);

        catalog
            .add_product(product(6, "Chair", "Furniture", 90.0, 4))
            .unwrap();
        assert_eq!(
            catalog.categories(),
            ["Electronics", "Books", "Clothing", "Furniture"]
        );
        assert_eq!(catalog.products().len(), 6);
        assert_eq!(catalog.next_id(), ProductId::new(7));
        assert_eq!(catalog.persistence().save_count(), 2);

        let stored = catalog.persistence().stored().unwrap();
        assert_eq!(decode_products(stored).unwrap(), catalog.products());
    }

    #[test]
    fn test_add_product_rejects_duplicate_id() {
        let mut catalog = seeded();
        let err = catalog
            .add_product(product(2, "Other", "Misc", 1.0, 1))
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateProductId(id) if id == ProductId::new(2)));
        assert_eq!(catalog.products().len(), 4);
        assert_eq!(catalog.categories().len(), 3);
        assert_eq!(catalog.persistence().save_count(), 0);
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut catalog = seeded();
        let draft = NewProduct {
            name: "Desk Lamp".to_string(),
            description: "Home".to_string(),
            price: 35.0,
            stock: 2,
            ..NewProduct::default()
        };
        let first = catalog.register(draft.clone()).unwrap();
        let second = catalog.register(draft).unwrap();
        assert_eq!(first.id, ProductId::new(5));
        assert_eq!(second.id, ProductId::new(6));
        assert_eq!(catalog.categories().last().map(String::as_str), Some("Home"));
    }

    #[test]
    fn test_register_rejects_invalid_draft() {
        let mut catalog = seeded();
        let err = catalog.register(NewProduct::default()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(catalog.products().len(), 4);
        assert_eq!(catalog.persistence().save_count(), 0);
    }

    #[test]
    fn test_update_stock() {
        let mut catalog = seeded();
        assert!(catalog.update_stock(ProductId::new(3), 40));
        assert_eq!(catalog.product(ProductId::new(3)).unwrap().stock, 40);
        assert_eq!(catalog.persistence().save_count(), 1);
    }

    #[test]
    fn test_update_stock_unknown_id_still_saves() {
        let mut catalog = seeded();
        let before = catalog.products().to_vec();
        assert!(!catalog.update_stock(ProductId::new(99), 1));
        assert_eq!(catalog.products(), before.as_slice());
        assert_eq!(catalog.persistence().save_count(), 1);
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let mut catalog = Catalog::load(MemoryPersistence::new().failing_writes());
        assert!(catalog.update_stock(ProductId::new(1), 0));
        catalog
            .add_product(product(5, "Tablet", "Electronics", 300.0, 4))
            .unwrap();
        assert_eq!(catalog.product(ProductId::new(1)).unwrap().stock, 0);
        assert_eq!(catalog.products().len(), 5);
        assert_eq!(catalog.persistence().stored(), None);
        assert_eq!(catalog.persistence().save_count(), 2);
    }

    #[test]
    fn test_set_sort_toggles_same_field() {
        let mut catalog = seeded();
        catalog.set_sort(SortField::Price);
        assert_eq!(catalog.controls().sort_by, SortField::Price);
        assert!(catalog.controls().sort_asc);

        catalog.set_sort(SortField::Price);
        assert!(!catalog.controls().sort_asc);

        catalog.set_sort(SortField::Stock);
        assert_eq!(catalog.controls().sort_by, SortField::Stock);
        assert!(catalog.controls().sort_asc);
        assert_eq!(catalog.persistence().save_count(), 0);
    }

    #[test]
    fn test_filtered_products_through_controls() {
        let mut catalog = seeded();
        catalog.controls_mut().search = "o".to_string();
        catalog.controls_mut().filter_in_stock = true;
        catalog.set_sort(SortField::Stock);
        catalog.set_sort(SortField::Stock);

        let names: Vec<&str> = catalog
            .filtered_products()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        // "o" hits Laptop, Book, Phone (names) and Shirt via "Clothing"
        assert_eq!(names, ["Book", "Phone", "Laptop", "Shirt"]);
        assert_eq!(catalog.products(), seed_products().as_slice());
    }

    #[test]
    fn test_derived_views() {
        let catalog = seeded();
        assert_eq!(catalog.total_orders(), 14);
        assert!(catalog.total_revenue() > 0.0);
        assert_eq!(catalog.low_stock_products().len(), 2);
        assert_eq!(catalog.revenue_by_category().len(), 3);
        assert_eq!(catalog.sales_by_period().len(), 7);

        let laptop = catalog.product(ProductId::new(1)).unwrap();
        assert_eq!(catalog.forecast(laptop), "");
        let shirt = catalog.product(ProductId::new(3)).unwrap();
        assert_eq!(catalog.forecast(shirt), "");
    }

    #[test]
    fn test_into_persistence_returns_backend() {
        let mut catalog = seeded();
        catalog.save_products();
        let backend = catalog.into_persistence();
        assert!(backend.stored().is_some());
    }
}
