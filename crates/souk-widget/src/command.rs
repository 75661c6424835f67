//! # Control Commands
//!
//! The tagged commands emitted by cart controls.
//!
//! ## Why Commands Instead of Closures?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Closure wiring (rejected)        Command wiring (chosen)           │
//! │  ─────────────────────────        ───────────────────────           │
//! │                                                                     │
//! │  "+" ──► || cart.adjust(+1)       "+" ──► Increment("item1")        │
//! │  "-" ──► || cart.adjust(-1)       "-" ──► Decrement("item1")        │
//! │  Del ──► || cart.remove(id)       Del ──► Delete("item1")           │
//! │                                              │                      │
//! │  Each control captures the                   ▼                      │
//! │  model; UI and model are            Session::dispatch (one place)   │
//! │  welded together.                   applies the command and         │
//! │                                     re-renders.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A control is *bound* to a command; the event substrate delivers the
//! command to a single dispatcher. UI wiring never touches the model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user action on one cart line, tagged with the product id it
/// targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "productId", rename_all = "snake_case")]
pub enum Command {
    /// Raise the line's quantity by one.
    Increment(String),
    /// Lower the line's quantity by one (clamped at zero).
    Decrement(String),
    /// Remove the line from the cart.
    Delete(String),
}

impl Command {
    /// The product id this command targets.
    pub fn product_id(&self) -> &str {
        match self {
            Command::Increment(id) | Command::Decrement(id) | Command::Delete(id) => id,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Increment(id) => write!(f, "increment({id})"),
            Command::Decrement(id) => write!(f, "decrement({id})"),
            Command::Delete(id) => write!(f, "delete({id})"),
        }
    }
}
