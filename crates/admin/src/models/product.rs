//! Product domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_core::{Price, ProductId};

/// A catalog product (domain type).
///
/// Serializes with camelCase field names for the JSON API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-generated, immutable identifier.
    pub id: ProductId,
    /// Display name (at least 3 characters).
    pub name: String,
    /// Free-text description (non-empty).
    pub description: String,
    /// Unit price, strictly positive.
    pub price: Price,
    /// Units on hand, never negative.
    pub stock: i32,
    /// Public URL of the product image on the asset host.
    pub image_url: Option<String>,
    /// Creation time; listings sort on this, newest first.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let product = Product {
            id: ProductId::generate(),
            name: "Mug".to_string(),
            description: "Ceramic mug".to_string(),
            price: Price::new("9.99".parse().unwrap()).unwrap(),
            stock: 50,
            image_url: Some("https://host/img.png".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["stock"], 50);
    }
}
