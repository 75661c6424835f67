//! # souk-widget: Display Boundary and Sessions
//!
//! Everything between the pure cart model ([`souk_core`]) and the
//! display substrate that embeds the widget.
//!
//! ## Module Organization
//! ```text
//! souk_widget/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── surface.rs      ◄─── Surface trait + MemorySurface arena
//! ├── command.rs      ◄─── Tagged control commands
//! ├── view.rs         ◄─── CartView: full-rebuild projection
//! └── session.rs      ◄─── Session: catalog-injected lifecycle owner
//! ```
//!
//! ## The Widget Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                                                                     │
//! │   user activates control ──► substrate yields bound Command         │
//! │                                      │                              │
//! │                                      ▼                              │
//! │                           Session::dispatch(cmd)                    │
//! │                                      │                              │
//! │                        cart mutates (clamped, no-op safe)           │
//! │                                      │                              │
//! │                                      ▼                              │
//! │                  CartView::render rebuilds the subtree              │
//! │                                      │                              │
//! │                                      ▼                              │
//! │                        surface shows current state ─────────────┐   │
//! │                                                                 │   │
//! │   ◄─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-threaded and synchronous: a dispatch runs to completion
//! (mutation + re-render) before the next activation can be delivered.
//!
//! ## Example
//! ```rust
//! use souk_core::{Catalog, Product};
//! use souk_widget::{Command, MemorySurface, Session};
//!
//! let catalog = Catalog::new(vec![
//!     Product::new("item1", "Farine", 90, "http://example.tn/farine.png"),
//! ]).unwrap();
//!
//! let mut session = Session::open(catalog, MemorySurface::new());
//! session.dispatch(Command::Increment("item1".into()));
//!
//! assert_eq!(session.cart().total().to_string(), "DT 0.90");
//! ```

pub mod command;
pub mod session;
pub mod surface;
pub mod view;

pub use command::Command;
pub use session::Session;
pub use surface::{MemorySurface, NodeId, NodeKind, Surface};
pub use view::{CartView, MOUNT_POINT};
