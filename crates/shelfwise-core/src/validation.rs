//! # Validation Module
//!
//! Checks for products entered on the registration screen.
//!
//! ## Usage
//! ```rust
//! use shelfwise_core::validation::{validate_price, validate_product_name};
//!
//! assert!(validate_product_name("Desk Lamp").is_ok());
//! assert!(validate_price(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{Product, ProductId};
use crate::SALES_WINDOW;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 200;
const MAX_CATEGORY_LEN: usize = 100;
const MAX_IMAGE_LEN: usize = 2048;

// =============================================================================
// New Product Draft
// =============================================================================

/// A product as entered for registration, before it has an id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    /// Category of the new product.
    pub description: String,
    pub price: f64,
    pub stock: u32,
    #[serde(default)]
    pub image: String,
    /// Sales history, if known. Defaults to a zeroed window.
    #[serde(default)]
    #[ts(optional)]
    pub sales: Option<Vec<u32>>,
}

impl NewProduct {
    /// Runs every field check, returning the first failure.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_product_name(&self.name)?;
        validate_category(&self.description)?;
        validate_price(self.price)?;
        validate_image_url(&self.image)?;
        Ok(())
    }

    /// Builds the stored product under `id`.
    ///
    /// Name and category are trimmed. A draft without sales history gets
    /// `SALES_WINDOW` empty periods so it shows up in period charts.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price,
            stock: self.stock,
            image: self.image.trim().to_string(),
            sales: Some(self.sales.unwrap_or_else(|| vec![0; SALES_WINDOW])),
        }
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name: required, at most 200 characters.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, MAX_NAME_LEN)
}

/// Validates a category: required, at most 100 characters.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    validate_text("category", category, MAX_CATEGORY_LEN)
}

/// Validates a price: a finite number, zero allowed.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotANumber {
            field: "price".to_string(),
            value: price.to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an image URL. Empty is allowed.
pub fn validate_image_url(url: &str) -> ValidationResult<()> {
    if url.trim().chars().count() > MAX_IMAGE_LEN {
        return Err(ValidationError::TooLong {
            field: "image".to_string(),
            max: MAX_IMAGE_LEN,
        });
    }
    Ok(())
}

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
