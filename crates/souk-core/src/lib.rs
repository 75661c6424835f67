//! # souk-core: Pure Cart Model for the souk Widget
//!
//! This crate is the **heart** of the souk shopping-cart widget. It
//! contains the cart model as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        souk Architecture                            │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                    Display Substrate                        │   │
//! │  │      (DOM-like surface: elements, text, activations)        │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │ Surface trait                        │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │                       souk-widget                           │   │
//! │  │       Session ──► Command dispatch ──► CartView render      │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │                                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │                ★ souk-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐              │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │              │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │              │   │
//! │  │   │  Catalog  │  │ DT x.xx   │  │ CartLine  │              │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘              │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO RENDERING • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Product and validated Catalog types
//! - [`cart`] - Cart and CartLine state
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Catalog-load error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic
//! 2. **No I/O**: rendering, files, network are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are minor units (i64)
//! 4. **No-op over error**: cart operations on absent ids report `false`
//!    instead of failing; only catalog loading returns typed errors
//!
//! ## Example Usage
//!
//! ```rust
//! use souk_core::{Cart, Catalog, Product};
//!
//! let catalog = Catalog::new(vec![
//!     Product::new("item1", "Farine", 90, "http://example.tn/farine.png"),
//!     Product::new("item3", "Lait", 150, "http://example.tn/lait.png"),
//! ]).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_item(catalog.get("item1").unwrap(), 1);
//! cart.add_item(catalog.get("item3").unwrap(), 1);
//!
//! assert_eq!(cart.total().to_string(), "DT 2.40");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use souk_core::Money` instead of
// `use souk_core::money::Money`

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, Product};
pub use error::{CatalogError, CatalogResult};
pub use money::Money;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency tag rendered before every monetary value.
///
/// ## Why a constant?
/// The widget renders a single fixed currency. Localized currency
/// handling would live in an embedder, not in this core.
pub const CURRENCY_TAG: &str = "DT";
