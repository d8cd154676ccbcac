//! Immutable product catalog record.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;
use crate::types::slug::Slug;

/// A product as supplied by the catalog.
///
/// Products are read-only: the client core never mutates them, it only looks
/// them up by [`ProductId`] or [`Slug`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Unique URL-safe identifier used in navigation paths.
    pub slug: Slug,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Price,
    /// Reference to the primary product image.
    pub hero_image: String,
    /// Ordered gallery image references.
    pub images_url: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": 1,
            "slug": "wireless-earbuds",
            "title": "Wireless Earbuds",
            "price": { "amount": "49.99", "currency_code": "USD" },
            "heroImage": "images/earbuds-hero.png",
            "imagesUrl": ["images/earbuds-1.png", "images/earbuds-2.png"]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.slug.as_str(), "wireless-earbuds");
        assert_eq!(product.images_url.len(), 2);
    }
}
