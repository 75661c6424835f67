//! # Error Types
//!
//! Domain-specific error types for souk-core.
//!
//! ## Error Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  souk-core errors (this file)                                       │
//! │  └── CatalogError   - Catalog-load validation failures              │
//! │                                                                     │
//! │  Cart operations NEVER error: operating on a product id that is    │
//! │  not in the cart is a defined no-op (the operation reports false), │
//! │  and quantities clamp at zero instead of failing.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, price, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Catalog Error
// =============================================================================

/// Catalog-load validation errors.
///
/// These occur once, when a catalog is constructed or parsed. After a
/// catalog exists, every lookup is an `Option`, never an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two catalog entries share a product id.
    #[error("duplicate product id in catalog: {0}")]
    DuplicateId(String),

    /// A catalog entry carries a negative price.
    #[error("negative price for product {id}: {price_cents} cents")]
    NegativePrice { id: String, price_cents: i64 },

    /// A catalog entry has an empty product id.
    #[error("empty product id in catalog entry '{name}'")]
    EmptyId { name: String },

    /// The catalog JSON could not be parsed.
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::DuplicateId("item1".to_string());
        assert_eq!(err.to_string(), "duplicate product id in catalog: item1");

        let err = CatalogError::NegativePrice {
            id: "item2".to_string(),
            price_cents: -80,
        };
        assert_eq!(
            err.to_string(),
            "negative price for product item2: -80 cents"
        );
    }

    #[test]
    fn test_parse_error_converts() {
        let parse_err = serde_json::from_str::<Vec<i64>>("not json").unwrap_err();
        let err: CatalogError = parse_err.into();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
