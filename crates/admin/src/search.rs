//! In-memory catalog search.
//!
//! The catalog is admin-curated and bounded, so search runs as a pure filter
//! over the already-fetched listing rather than a database query. Relative
//! ordering of the input is preserved.

use crate::models::Product;

/// Filter a product listing by a case-insensitive substring match.
///
/// The term is matched against the ID, name, description, and the string
/// forms of price and stock. An empty (or whitespace-only) term returns the
/// listing unchanged.
#[must_use]
pub fn filter_products(products: Vec<Product>, term: &str) -> Vec<Product> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return products;
    }

    products
        .into_iter()
        .filter(|p| matches_term(p, &needle))
        .collect()
}

fn matches_term(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.id.to_string().contains(needle)
        || product.price.to_string().contains(needle)
        || product.stock.to_string().contains(needle)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use stockroom_core::{Price, ProductId};

    use super::*;

    fn product(name: &str, description: &str, price: &str, stock: i32) -> Product {
        Product {
            id: ProductId::generate(),
            name: name.to_string(),
            description: description.to_string(),
            price: Price::new(price.parse().unwrap()).unwrap(),
            stock,
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("Mug", "Ceramic mug", "9.99", 50),
            product("Poster", "Wall poster", "14.50", 3),
            product("Sticker pack", "Vinyl stickers", "4.00", 120),
        ]
    }

    #[test]
    fn test_empty_term_returns_everything() {
        assert_eq!(filter_products(catalog(), "").len(), 3);
        assert_eq!(filter_products(catalog(), "   ").len(), 3);
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let hits = filter_products(catalog(), "MUG");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().unwrap().name, "Mug");
    }

    #[test]
    fn test_matches_description() {
        let hits = filter_products(catalog(), "vinyl");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().unwrap().name, "Sticker pack");
    }

    #[test]
    fn test_matches_price_and_stock_strings() {
        assert_eq!(filter_products(catalog(), "14.50").len(), 1);
        assert_eq!(filter_products(catalog(), "120").len(), 1);
    }

    #[test]
    fn test_matches_id() {
        let products = catalog();
        let id = products.first().unwrap().id.to_string();
        let hits = filter_products(products, &id);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter_products(catalog(), "zzzzz").is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let hits = filter_products(catalog(), "er");
        // "Poster" and "Sticker pack" both match, in listing order
        let names: Vec<_> = hits.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Poster", "Sticker pack"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let once = filter_products(catalog(), "mug");
        let twice = filter_products(once.clone(), "mug");
        assert_eq!(once.len(), twice.len());
    }
}
