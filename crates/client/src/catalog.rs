//! Static product catalog.
//!
//! The catalog is an immutable, ordered sequence of [`Product`] records
//! loaded once at startup and looked up by id or slug. There is no network
//! access and nothing to invalidate; the presentation layer reads it, the
//! cart prices against it.

use std::collections::HashMap;

use thiserror::Error;

use pocketshop_core::{Product, ProductId};

/// Demo catalog shipped with the crate, mirroring the app's bundled assets.
const BUILTIN_PRODUCTS: &str = include_str!("../assets/products.json");

/// Errors that can occur while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog JSON could not be parsed.
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share the same id.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    /// Two products share the same slug.
    #[error("duplicate product slug {0:?}")]
    DuplicateSlug(String),
}

/// Read-only product catalog with id and slug indices.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
    by_slug: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from an ordered product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] or [`CatalogError::DuplicateSlug`]
    /// if the uniqueness constraints are violated.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(products.len());
        let mut by_slug = HashMap::with_capacity(products.len());

        for (index, product) in products.iter().enumerate() {
            if by_id.insert(product.id, index).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if by_slug
                .insert(product.slug.as_str().to_owned(), index)
                .is_some()
            {
                return Err(CatalogError::DuplicateSlug(
                    product.slug.as_str().to_owned(),
                ));
            }
        }

        Ok(Self {
            products,
            by_id,
            by_slug,
        })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] on malformed JSON, or a duplicate
    /// error if the data violates uniqueness.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// The demo catalog bundled with the crate.
    ///
    /// # Panics
    ///
    /// Panics if the bundled asset is invalid; a unit test validates it.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_PRODUCTS).expect("bundled catalog asset is valid")
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn by_id(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).and_then(|&i| self.products.get(i))
    }

    /// Look up a product by slug.
    #[must_use]
    pub fn by_slug(&self, slug: &str) -> Option<&Product> {
        self.by_slug.get(slug).and_then(|&i| self.products.get(i))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": 1,
            "slug": "wireless-earbuds",
            "title": "Wireless Earbuds",
            "price": { "amount": "49.99", "currency_code": "USD" },
            "heroImage": "images/earbuds-hero.png",
            "imagesUrl": ["images/earbuds-1.png"]
        },
        {
            "id": 2,
            "slug": "usb-c-hub",
            "title": "USB-C Hub",
            "price": { "amount": "34.50", "currency_code": "USD" },
            "heroImage": "images/hub-hero.png",
            "imagesUrl": []
        }
    ]"#;

    #[test]
    fn test_from_json_preserves_order() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let slugs: Vec<&str> = catalog
            .products()
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(slugs, ["wireless-earbuds", "usb-c-hub"]);
    }

    #[test]
    fn test_lookup_by_id_and_slug() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();

        let by_id = catalog.by_id(ProductId::new(2)).unwrap();
        assert_eq!(by_id.title, "USB-C Hub");

        let by_slug = catalog.by_slug("wireless-earbuds").unwrap();
        assert_eq!(by_slug.id, ProductId::new(1));

        assert!(catalog.by_id(ProductId::new(404)).is_none());
        assert!(catalog.by_slug("nope").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = SAMPLE.replace("\"id\": 2", "\"id\": 1");
        let result = Catalog::from_json(&json);
        assert!(matches!(result, Err(CatalogError::DuplicateId(_))));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let json = SAMPLE.replace("usb-c-hub", "wireless-earbuds");
        let result = Catalog::from_json(&json);
        assert!(matches!(result, Err(CatalogError::DuplicateSlug(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        // Every product must be reachable through both indices.
        for product in catalog.products() {
            assert_eq!(catalog.by_id(product.id).unwrap().id, product.id);
            assert_eq!(
                catalog.by_slug(product.slug.as_str()).unwrap().id,
                product.id
            );
        }
    }
}
