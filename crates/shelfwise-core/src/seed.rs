//! # Seed Catalog
//!
//! The products a catalog starts with when persistence has nothing usable.

use crate::types::{Product, ProductId};

/// (id, name, category, price, stock, image, sales)
const SEED: &[(u32, &str, &str, f64, u32, &str, [u32; 7])] = &[
    (
        1,
        "Laptop",
        "Electronics",
        1200.0,
        3,
        "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?auto=format&fit=facearea&w=40&h=40",
        [1, 1, 1, 0, 0, 0, 0],
    ),
    (
        2,
        "Book",
        "Books",
        40.0,
        10,
        "https://images.unsplash.com/photo-1512820790803-83ca734da794?auto=format&fit=facearea&w=40&h=40",
        [2, 1, 0, 0, 0, 0, 0],
    ),
    (
        3,
        "Shirt",
        "Clothing",
        25.0,
        2,
        "https://images.unsplash.com/photo-1512436991641-6745cdb1723f?auto=format&fit=facearea&w=40&h=40",
        [1, 0, 0, 0, 0, 0, 0],
    ),
    (
        4,
        "Phone",
        "Electronics",
        800.0,
        7,
        "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?auto=format&fit=facearea&w=40&h=40",
        [1, 1, 1, 1, 1, 1, 1],
    ),
];

/// Returns a fresh copy of the seed products.
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|&(id, name, category, price, stock, image, sales)| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: category.to_string(),
            price,
            stock,
            image: image.to_string(),
            sales: Some(sales.to_vec()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique_and_sequential() {
        let ids: Vec<u32> = seed_products().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
