//! # Cart Session
//!
//! One user's cart, from open to teardown. The session is the single
//! owner of all mutable widget state: the injected catalog, the cart,
//! the view, and the surface it projects into. Nothing here is global.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Session Lifecycle                             │
//! │                                                                     │
//! │  Session::open(catalog, surface)                                    │
//! │       │  seeds one zero-quantity line per catalog product           │
//! │       │  (the whole catalog is visible from the first render)       │
//! │       ▼                                                             │
//! │  dispatch(Command) ──► mutate cart ──► full re-render               │
//! │  add_product(id, qty) ─► catalog lookup ─► add_item ─► re-render    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  teardown() ──► clears the mount point, returns the surface         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutating entry point re-renders before returning, so the
//! surface never shows stale state. Commands targeting ids that are
//! not in the cart are logged no-ops.

use tracing::{debug, info, warn};
use uuid::Uuid;

use souk_core::{Cart, Catalog};

use crate::command::Command;
use crate::surface::Surface;
use crate::view::{CartView, MOUNT_POINT};

/// A live cart session over a display surface.
#[derive(Debug)]
pub struct Session<S: Surface> {
    id: Uuid,
    catalog: Catalog,
    cart: Cart,
    view: CartView,
    surface: S,
}

impl<S: Surface> Session<S> {
    /// Opens a session: seeds a zero-quantity line for every catalog
    /// product and performs the initial render.
    ///
    /// Seeding at quantity zero keeps the whole catalog on screen with
    /// its increment controls, so the user can add a product without a
    /// separate picker.
    pub fn open(catalog: Catalog, surface: S) -> Self {
        let id = Uuid::new_v4();
        info!(session_id = %id, products = catalog.len(), "opening cart session");

        let mut cart = Cart::new();
        for product in catalog.products() {
            cart.add_item(product, 0);
        }

        let mut session = Session {
            id,
            catalog,
            cart,
            view: CartView::new(),
            surface,
        };
        session.render();
        session
    }

    /// The session's unique identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The injected catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read access to the cart model.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Read access to the surface (projections, activations).
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, for substrates that need event
    /// pumping between dispatches.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Applies one control command to the cart, then re-renders.
    ///
    /// Commands for ids not in the cart are no-ops; they are logged and
    /// swallowed, never surfaced as errors.
    pub fn dispatch(&mut self, command: Command) {
        debug!(session_id = %self.id, %command, "dispatching command");

        let applied = match &command {
            Command::Increment(id) => self.cart.adjust_quantity(id, 1),
            Command::Decrement(id) => self.cart.adjust_quantity(id, -1),
            Command::Delete(id) => self.cart.remove_item(id),
        };

        if !applied {
            warn!(session_id = %self.id, %command, "command targeted an id not in the cart");
        }

        self.render();
    }

    /// Adds `qty` of a catalog product to the cart and re-renders.
    ///
    /// Returns `false` (without touching the cart) when the id is not
    /// in the catalog.
    pub fn add_product(&mut self, product_id: &str, qty: i64) -> bool {
        // Clone ends the catalog borrow before the cart mutates.
        let Some(product) = self.catalog.get(product_id).cloned() else {
            warn!(session_id = %self.id, product_id, "product not in catalog");
            return false;
        };

        debug!(session_id = %self.id, product_id, qty, "adding product to cart");
        self.cart.add_item(&product, qty);
        self.render();
        true
    }

    /// Ends the session: clears the mount point and hands the surface
    /// back to the embedder.
    pub fn teardown(mut self) -> S {
        info!(session_id = %self.id, "tearing down cart session");
        let root = self.surface.root(MOUNT_POINT);
        self.surface.clear_children(root);
        self.surface
    }

    fn render(&mut self) {
        self.view.render(&mut self.surface, &self.cart);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;
    use souk_core::Product;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("item1", "Farine", 90, "http://example.tn/farine.png"),
            Product::new("item2", "Semoule", 80, "http://example.tn/semoule.png"),
            Product::new("item3", "Lait", 150, "http://example.tn/lait.png"),
        ])
        .unwrap()
    }

    fn open_session() -> Session<MemorySurface> {
        Session::open(sample_catalog(), MemorySurface::new())
    }

    #[test]
    fn test_open_seeds_whole_catalog_at_zero() {
        let session = open_session();

        assert_eq!(session.cart().len(), 3);
        assert!(session.cart().lines().iter().all(|l| l.quantity() == 0));

        // Already rendered: every product visible, total zero.
        let surface = session.surface();
        let root = surface.mount(MOUNT_POINT).unwrap();
        let text = surface.render_text(root);
        for name in ["Farine", "Semoule", "Lait"] {
            assert!(text.contains(name), "missing {name} in: {text}");
        }
        assert!(text.ends_with("Total: DT 0.00"));
    }

    #[test]
    fn test_dispatch_increment_decrement() {
        let mut session = open_session();

        session.dispatch(Command::Increment("item1".into()));
        session.dispatch(Command::Increment("item1".into()));
        assert_eq!(session.cart().line("item1").unwrap().quantity(), 2);

        session.dispatch(Command::Decrement("item1".into()));
        assert_eq!(session.cart().line("item1").unwrap().quantity(), 1);
        assert_eq!(session.cart().total().to_string(), "DT 0.90");
    }

    #[test]
    fn test_dispatch_decrement_clamps_at_zero() {
        let mut session = open_session();

        session.dispatch(Command::Decrement("item2".into()));
        assert_eq!(session.cart().line("item2").unwrap().quantity(), 0);
    }

    #[test]
    fn test_dispatch_delete_removes_line_and_projection() {
        let mut session = open_session();

        session.dispatch(Command::Delete("item3".into()));
        assert!(session.cart().line("item3").is_none());

        let surface = session.surface();
        let root = surface.mount(MOUNT_POINT).unwrap();
        assert!(!surface.render_text(root).contains("Lait"));
    }

    #[test]
    fn test_dispatch_absent_id_is_silent_noop() {
        let mut session = open_session();
        let before = session.cart().clone();

        session.dispatch(Command::Increment("item9".into()));
        session.dispatch(Command::Delete("item9".into()));

        assert_eq!(session.cart().len(), before.len());
        assert_eq!(session.cart().total(), before.total());
    }

    #[test]
    fn test_add_product_from_catalog() {
        let mut session = open_session();

        assert!(session.add_product("item1", 2));
        assert!(session.add_product("item1", 3));
        assert_eq!(session.cart().line("item1").unwrap().quantity(), 5);
        assert_eq!(session.cart().total().to_string(), "DT 4.50");

        assert!(!session.add_product("item9", 1));
        assert_eq!(session.cart().len(), 3);
    }

    #[test]
    fn test_activation_round_trip() {
        // A control rendered by the view, activated on the surface,
        // dispatched back into the session: the full widget loop.
        let mut session = open_session();

        let command = {
            let surface = session.surface();
            let root = surface.mount(MOUNT_POINT).unwrap();
            let plus = surface
                .find_control(root, &Command::Increment("item2".into()))
                .unwrap();
            surface.activate(plus).unwrap()
        };
        session.dispatch(command);

        assert_eq!(session.cart().line("item2").unwrap().quantity(), 1);
    }

    #[test]
    fn test_teardown_clears_mount_point() {
        let session = open_session();
        let mut surface = session.teardown();

        let root = surface.root(MOUNT_POINT);
        assert_eq!(surface.render_text(root), "");
    }

    #[test]
    fn test_sessions_are_independent() {
        let a = open_session();
        let b = open_session();
        assert_ne!(a.id(), b.id());
    }
}
