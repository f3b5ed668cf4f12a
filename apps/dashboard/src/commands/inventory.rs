//! # Inventory Management
//!
//! The filtered product table, the low-stock list, and stock updates.

use std::io::Write;

use serde::Serialize;
use shelfwise_core::{Catalog, Persistence, Product, ProductId};

use super::{write_json, OutputFormat};
use crate::error::{AppError, AppResult};

/// A product with its depletion message (empty when there is none).
#[derive(Debug, Serialize)]
pub struct InventoryRow<'a> {
    #[serde(flatten)]
    pub product: &'a Product,
    pub forecast: String,
}

impl<'a> InventoryRow<'a> {
    fn new<P: Persistence>(catalog: &Catalog<P>, product: &'a Product) -> Self {
        InventoryRow {
            product,
            forecast: catalog.forecast(product),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InventoryView<'a> {
    categories: &'a [String],
    products: Vec<InventoryRow<'a>>,
    low_stock: Vec<InventoryRow<'a>>,
}

/// Prints the products passing the catalog's view controls, then the
/// low-stock list.
pub fn show<P: Persistence>(
    catalog: &Catalog<P>,
    format: OutputFormat,
    out: &mut impl Write,
) -> AppResult<()> {
    let view = InventoryView {
        categories: catalog.categories(),
        products: rows(catalog, catalog.filtered_products()),
        low_stock: rows(catalog, catalog.low_stock_products()),
    };

    match format {
        OutputFormat::Json => write_json(out, &view),
        OutputFormat::Text => {
            write_table(&view.products, out)?;
            writeln!(out)?;
            writeln!(out, "Low stock")?;
            write_table(&view.low_stock, out)
        }
    }
}

/// Prints only the low-stock products.
pub fn show_low_stock<P: Persistence>(
    catalog: &Catalog<P>,
    format: OutputFormat,
    out: &mut impl Write,
) -> AppResult<()> {
    let low_stock = rows(catalog, catalog.low_stock_products());

    match format {
        OutputFormat::Json => write_json(out, &low_stock),
        OutputFormat::Text => write_table(&low_stock, out),
    }
}

/// Sets the stock of product `id`.
///
/// The catalog saves even when the id is unknown; the command then reports
/// `ProductNotFound`.
pub fn restock<P: Persistence>(
    catalog: &mut Catalog<P>,
    id: ProductId,
    stock: u32,
    format: OutputFormat,
    out: &mut impl Write,
) -> AppResult<()> {
    if !catalog.update_stock(id, stock) {
        return Err(AppError::ProductNotFound(id));
    }
    let product = catalog.product(id).ok_or(AppError::ProductNotFound(id))?;
    let row = InventoryRow::new(catalog, product);

    match format {
        OutputFormat::Json => write_json(out, &row),
        OutputFormat::Text => write_table(std::slice::from_ref(&row), out),
    }
}

fn rows<'a, P: Persistence>(catalog: &Catalog<P>, list: Vec<&'a Product>) -> Vec<InventoryRow<'a>> {
    list.into_iter()
        .map(|product| InventoryRow::new(catalog, product))
        .collect()
}

fn write_table(rows: &[InventoryRow<'_>], out: &mut impl Write) -> AppResult<()> {
    if rows.is_empty() {
        writeln!(out, "(no products)")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:>4}  {:<24} {:<16} {:>10} {:>6}  {}",
        "ID", "Name", "Category", "Price", "Stock", "Forecast"
    )?;
    for row in rows {
        let p = row.product;
        writeln!(
            out,
            "{:>4}  {:<24} {:<16} {:>10.2} {:>6}  {}",
            p.id.get(), p.name, p.description, p.price, p.stock, row.forecast
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfwise_core::{MemoryPersistence, SortField, ViewControls};

    fn catalog() -> Catalog<MemoryPersistence> {
        Catalog::load(MemoryPersistence::new())
    }

    #[test]
    fn test_show_applies_controls() {
        let mut catalog = catalog();
        *catalog.controls_mut() = ViewControls {
            selected_category: "Electronics".to_string(),
            sort_by: SortField::Price,
            ..ViewControls::default()
        };

        let mut out = Vec::new();
        show(&catalog, OutputFormat::Json, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        let names: Vec<&str> = json["products"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Phone", "Laptop"]);
        assert_eq!(json["lowStock"].as_array().unwrap().len(), 2);
        assert_eq!(json["products"][0]["forecast"], "");
    }

    #[test]
    fn test_text_table_shows_forecast() {
        let mut catalog = catalog();
        catalog.update_stock(ProductId::new(4), 3);

        let mut out = Vec::new();
        show(&catalog, OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Forecast: 3 days left"));
        assert!(text.contains("Low stock"));
    }

    #[test]
    fn test_restock_known_and_unknown() {
        let mut catalog = catalog();
        let mut out = Vec::new();
        restock(&mut catalog, ProductId::new(3), 12, OutputFormat::Text, &mut out).unwrap();
        assert_eq!(catalog.product(ProductId::new(3)).unwrap().stock, 12);

        let err = restock(&mut catalog, ProductId::new(77), 1, OutputFormat::Text, &mut out)
            .unwrap_err();
        assert!(matches!(err, AppError::ProductNotFound(_)));
        assert_eq!(catalog.persistence().save_count(), 2);
    }

    #[test]
    fn test_empty_low_stock() {
        let mut catalog = catalog();
        catalog.update_stock(ProductId::new(1), 50);
        catalog.update_stock(ProductId::new(3), 50);

        let mut out = Vec::new();
        show_low_stock(&catalog, OutputFormat::Text, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "(no products)\n");
    }
}
