//! # Cart View
//!
//! Projects the cart model onto a [`Surface`]. Pure projection: the
//! view reads the cart and writes nodes, never the other way around.
//!
//! ## Rendered Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  root("cart")                                                       │
//! │  ├── row (Container)            one per cart line, cart order       │
//! │  │   ├── Image    src=product.image, alt=product.name               │
//! │  │   ├── Text     product.name                                      │
//! │  │   ├── Button   "+"      bound to Increment(product.id)           │
//! │  │   ├── Text     quantity                                          │
//! │  │   ├── Button   "-"      bound to Decrement(product.id)           │
//! │  │   ├── Button   "Delete" bound to Delete(product.id)              │
//! │  │   └── Text     line total, e.g. "DT 0.90"                        │
//! │  ├── row …                                                          │
//! │  └── Text "Total: DT 2.40"                                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every render discards the previous subtree and rebuilds it from the
//! model. No diffing: line counts are tiny and there is no focus or
//! animation state to preserve.

use souk_core::Cart;

use crate::command::Command;
use crate::surface::{NodeId, NodeKind, Surface};

/// Identifier of the mount point the widget projects into.
pub const MOUNT_POINT: &str = "cart";

/// The cart's visual projection.
#[derive(Debug, Default)]
pub struct CartView;

impl CartView {
    pub fn new() -> Self {
        CartView
    }

    /// Fully regenerates the cart subtree from `cart`.
    ///
    /// Idempotent: rendering twice with no intervening mutation
    /// produces an identical projection.
    pub fn render<S: Surface>(&self, surface: &mut S, cart: &Cart) {
        let root = surface.root(MOUNT_POINT);
        surface.clear_children(root);

        for line in cart.lines() {
            let row = self.render_line(surface, line);
            surface.append_child(root, row);
        }

        let total = surface.create_element(NodeKind::Text);
        surface.set_text(total, &format!("Total: {}", cart.total()));
        surface.append_child(root, total);
    }

    fn render_line<S: Surface>(&self, surface: &mut S, line: &souk_core::CartLine) -> NodeId {
        let product = &line.product;
        let row = surface.create_element(NodeKind::Container);

        let image = surface.create_element(NodeKind::Image);
        surface.set_image_source(image, &product.image);
        surface.set_alt_text(image, &product.name);
        surface.append_child(row, image);

        let name = surface.create_element(NodeKind::Text);
        surface.set_text(name, &product.name);
        surface.append_child(row, name);

        let inc = self.button(surface, "+", Command::Increment(product.id.clone()));
        surface.append_child(row, inc);

        let quantity = surface.create_element(NodeKind::Text);
        surface.set_text(quantity, &line.quantity().to_string());
        surface.append_child(row, quantity);

        let dec = self.button(surface, "-", Command::Decrement(product.id.clone()));
        surface.append_child(row, dec);

        let delete = self.button(surface, "Delete", Command::Delete(product.id.clone()));
        surface.append_child(row, delete);

        let line_total = surface.create_element(NodeKind::Text);
        surface.set_text(line_total, &line.line_total().to_string());
        surface.append_child(row, line_total);

        row
    }

    fn button<S: Surface>(&self, surface: &mut S, label: &str, command: Command) -> NodeId {
        let button = surface.create_element(NodeKind::Button);
        surface.set_text(button, label);
        surface.bind(button, command);
        button
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
