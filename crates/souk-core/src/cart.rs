//! # Cart Module
//!
//! `CartLine` and `Cart`: the mutable state of one shopping session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Cart State Operations                         │
//! │                                                                     │
//! │  Control Activation        Dispatched Command      Cart Change      │
//! │  ──────────────────        ──────────────────      ───────────      │
//! │                                                                     │
//! │  Pick product ───────────► add_item(p, qty) ─────► line.qty += qty  │
//! │                                                     (or new line)   │
//! │  "+" button ─────────────► adjust_quantity(+1) ──► qty = qty + 1    │
//! │                                                                     │
//! │  "-" button ─────────────► adjust_quantity(-1) ──► qty clamped ≥ 0  │
//! │                                                                     │
//! │  Delete button ──────────► remove_item(id) ──────► line removed     │
//! │                                                                     │
//! │  NOTE: the re-render after each mutation lives one layer up, in    │
//! │        the Session dispatcher. The cart itself is pure state.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id (adding the same product merges).
//! - Quantity is never negative: EVERY path clamps at zero, including
//!   `add_item` with a negative quantity argument.
//! - Quantity and total arithmetic saturates at the i64 range, so an
//!   extreme quantity pins at the bound instead of wrapping negative.
//! - Operating on an id that is not in the cart is a no-op; the
//!   operation reports `false` so callers (and tests) can observe it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::money::Money;

// =============================================================================
// Cart Line
// =============================================================================

/// One line of the cart: a product snapshot and a quantity.
///
/// ## Design Notes
/// - `product`: frozen copy of the catalog entry at time of adding.
///   The cart stays self-contained even if a future catalog reload
///   changes a price.
/// - `quantity`: non-negative. A line at quantity 0 is legal and stays
///   in the cart until explicitly deleted, so the rendered widget keeps
///   showing its increment control.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product data at time of adding (frozen).
    pub product: Product,

    /// Quantity in cart, always >= 0.
    quantity: i64,

    /// When this line was created.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new line. A negative initial quantity clamps to 0.
    pub fn new(product: Product, quantity: i64) -> Self {
        CartLine {
            product,
            quantity: quantity.max(0),
            added_at: Utc::now(),
        }
    }

    /// The current quantity.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Calculates the line total (unit price × quantity).
    ///
    /// Non-negative by construction: prices are validated non-negative
    /// at catalog load, quantities clamp at zero, and the multiply
    /// saturates instead of wrapping.
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an insertion-ordered collection of lines, keyed
/// logically by product id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product to the cart, or merges into the existing line.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity becomes
    ///   `max(0, quantity + qty)`.
    /// - Product not in cart: a new line is appended with `max(0, qty)`.
    ///
    /// `qty` may be zero or negative; zero is how startup wiring seeds
    /// a visible line for every catalog product. Clamping is uniform
    /// with [`Cart::adjust_quantity`], so no path can produce a
    /// negative quantity.
    pub fn add_item(&mut self, product: &Product, qty: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(qty).max(0);
            return;
        }

        self.lines.push(CartLine::new(product.clone(), qty));
    }

    /// Removes the line for `product_id`.
    ///
    /// Returns `true` if a line was removed, `false` if the id was not
    /// in the cart (a defined no-op, never an error).
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() != initial_len
    }

    /// Adjusts the quantity of the line for `product_id` by `delta`,
    /// clamping at zero.
    ///
    /// Returns `true` if the line exists (even when the clamp makes the
    /// adjustment a wash), `false` if the id was not in the cart.
    pub fn adjust_quantity(&mut self, product_id: &str, delta: i64) -> bool {
        match self.lines.iter_mut().find(|l| l.product.id == product_id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(delta).max(0);
                true
            }
            None => false,
        }
    }

    /// The grand total: sum of all line totals.
    ///
    /// Format with `Display` for the fixed two-decimal `DT` string:
    ///
    /// ```rust
    /// use souk_core::{Cart, Product};
    ///
    /// let mut cart = Cart::new();
    /// cart.add_item(&Product::new("item1", "Farine", 90, "f.png"), 1);
    /// assert_eq!(cart.total().to_string(), "DT 0.90");
    /// ```
    pub fn total(&self) -> Money {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    /// All lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up a single line by product id.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Number of lines (including zero-quantity lines).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
