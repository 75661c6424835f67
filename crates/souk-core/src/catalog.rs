//! # Catalog Module
//!
//! `Product` and `Catalog`: the immutable inputs to a cart session.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Lifecycle                             │
//! │                                                                     │
//! │  JSON / in-code entries ──► Catalog::new ──► validated catalog      │
//! │                                  │                                  │
//! │                    rejects duplicate ids,                           │
//! │                    negative prices, empty ids                       │
//! │                                  │                                  │
//! │                                  ▼                                  │
//! │            injected into Session::open (never a global)             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are frozen after the catalog is built: a `CartLine` clones
//! its product, so nothing downstream can observe a mutation anyway.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A purchasable good in the catalog.
///
/// Immutable after catalog construction. `id` is the logical key used
/// everywhere downstream (cart lines, commands, rendered controls).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Display name shown next to the line.
    pub name: String,

    /// Price in minor currency units (90 = DT 0.90).
    pub price_cents: i64,

    /// URI of the product image.
    pub image: String,
}

impl Product {
    /// Creates a product. Validation happens at catalog construction,
    /// not here, so seed data can be written as plain literals.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_cents: i64, image: impl Into<String>) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price_cents,
            image: image.into(),
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The validated, immutable set of products for one session.
///
/// ## Invariants (checked by [`Catalog::new`])
/// - product ids are unique and non-empty
/// - prices are non-negative
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating every entry.
    ///
    /// ## Example
    /// ```rust
    /// use souk_core::catalog::{Catalog, Product};
    ///
    /// let catalog = Catalog::new(vec![
    ///     Product::new("item1", "Farine", 90, "http://example.tn/farine.png"),
    ///     Product::new("item3", "Lait", 150, "http://example.tn/lait.png"),
    /// ]).unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn new(products: Vec<Product>) -> CatalogResult<Self> {
        for (i, product) in products.iter().enumerate() {
            if product.id.is_empty() {
                return Err(CatalogError::EmptyId {
                    name: product.name.clone(),
                });
            }
            if product.price_cents < 0 {
                return Err(CatalogError::NegativePrice {
                    id: product.id.clone(),
                    price_cents: product.price_cents,
                });
            }
            // Linear scan is fine: catalogs here are a handful of entries.
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Catalog { products })
    }

    /// Parses a catalog from a JSON array of products, then validates it.
    ///
    /// ## Example
    /// ```rust
    /// use souk_core::catalog::Catalog;
    ///
    /// let catalog = Catalog::from_json(
    ///     r#"[{"id":"item1","name":"Farine","priceCents":90,"image":"x.png"}]"#,
    /// ).unwrap();
    /// assert_eq!(catalog.get("item1").unwrap().name, "Farine");
    /// ```
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Catalog::new(products)
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Iterates over all products in catalog order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn farine() -> Product {
        Product::new("item1", "Farine", 90, "http://example.tn/farine.png")
    }

    #[test]
    fn test_catalog_accepts_valid_entries() {
        let catalog = Catalog::new(vec![
            farine(),
            Product::new("item2", "Semoule", 80, "http://example.tn/semoule.png"),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("item2").unwrap().price().cents(), 80);
        assert!(catalog.get("item9").is_none());
    }

    #[test]
    fn test_catalog_rejects_duplicate_id() {
        let err = Catalog::new(vec![farine(), farine()]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "item1"));
    }

    #[test]
    fn test_catalog_rejects_negative_price() {
        let err = Catalog::new(vec![Product::new("item1", "Farine", -90, "x.png")]).unwrap_err();
        assert!(matches!(err, CatalogError::NegativePrice { .. }));
    }

    #[test]
    fn test_catalog_rejects_empty_id() {
        let err = Catalog::new(vec![Product::new("", "Farine", 90, "x.png")]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyId { .. }));
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog = Catalog::from_json(
            r#"[
                {"id":"item1","name":"Farine","priceCents":90,"image":"farine.png"},
                {"id":"item3","name":"Lait","priceCents":150,"image":"lait.png"}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("item3").unwrap().name, "Lait");
    }

    #[test]
    fn test_catalog_from_json_validates_after_parse() {
        let err = Catalog::from_json(
            r#"[
                {"id":"item1","name":"Farine","priceCents":90,"image":"a.png"},
                {"id":"item1","name":"Farine bis","priceCents":95,"image":"b.png"}
            ]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(_)));
    }

    #[test]
    fn test_catalog_from_bad_json() {
        let err = Catalog::from_json("{{nope").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
