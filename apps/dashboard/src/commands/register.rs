//! # Product Registration

use std::io::Write;

use shelfwise_core::{Catalog, NewProduct, Persistence};
use tracing::info;

use super::{write_json, OutputFormat};
use crate::error::AppResult;

/// Registers `draft` and prints the stored product.
pub fn register<P: Persistence>(
    catalog: &mut Catalog<P>,
    draft: NewProduct,
    format: OutputFormat,
    out: &mut impl Write,
) -> AppResult<()> {
    let product = catalog.register(draft)?;
    info!(id = %product.id, category = %product.description, "Product registered from CLI");

    match format {
        OutputFormat::Json => write_json(out, &product),
        OutputFormat::Text => {
            writeln!(
                out,
                "Registered #{} {} ({}) at {:.2}, {} in stock",
                product.id, product.name, product.description, product.price, product.stock
            )?;
            Ok(())
        }
    }
}
