//! # Display Surface
//!
//! The boundary between the widget and whatever actually draws it.
//!
//! ## The Substrate Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Surface (trait)                                │
//! │                                                                     │
//! │  widget side                          substrate side                │
//! │  ───────────                          ──────────────                │
//! │  create_element(kind)  ────────────►  new visual node (opaque id)   │
//! │  set_text / set_image_source /        node attributes               │
//! │  set_alt_text          ────────────►                                │
//! │  append_child / clear_children  ───►  tree structure                │
//! │  bind(node, Command)   ────────────►  activation wiring             │
//! │  root("cart")          ────────────►  pre-existing mount point      │
//! │                                                                     │
//! │  The widget never sees pixels, events, or markup. A DOM, a TUI     │
//! │  grid, or the in-memory arena below can all sit on the other side. │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`MemorySurface`] is the substrate shipped with the crate: an
//! id-indexed node arena. It backs every test and the kiosk demo, and
//! doubles as the reference semantics for real substrates.

use std::collections::HashMap;

use crate::command::Command;

// =============================================================================
// Node Vocabulary
// =============================================================================

/// Opaque handle to one visual node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// The kinds of visual node the widget creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Grouping node; children render in order.
    Container,
    /// Product image (source URI + alt text).
    Image,
    /// Plain text run.
    Text,
    /// Activatable control carrying a label and a bound [`Command`].
    Button,
}

// =============================================================================
// Surface Trait
// =============================================================================

/// The display substrate the widget renders into.
///
/// Controls are bound to tagged [`Command`]s rather than callbacks:
/// the substrate's event side delivers the bound command to a single
/// dispatcher (see `Session::dispatch`).
pub trait Surface {
    /// Creates a new detached node of the given kind.
    fn create_element(&mut self, kind: NodeKind) -> NodeId;

    /// Sets the text content of a text or button node.
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Sets the source URI of an image node.
    fn set_image_source(&mut self, node: NodeId, uri: &str);

    /// Sets the alt text of an image node.
    fn set_alt_text(&mut self, node: NodeId, alt: &str);

    /// Appends `child` as the last child of `parent`.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Detaches all children of `node`.
    fn clear_children(&mut self, node: NodeId);

    /// Binds a command to a control; activation delivers the command.
    fn bind(&mut self, node: NodeId, command: Command);

    /// The pre-existing mount point for `identifier` (the widget uses
    /// `"cart"`). Created on first use for substrates that have no
    /// pre-built document.
    fn root(&mut self, identifier: &str) -> NodeId;
}

// =============================================================================
// MemorySurface
// =============================================================================

/// One node in the arena.
#[derive(Debug, Clone, Default)]
struct Node {
    kind: Option<NodeKind>,
    text: String,
    image_source: String,
    alt_text: String,
    children: Vec<NodeId>,
    command: Option<Command>,
}

/// An in-memory display substrate over an id-indexed node arena.
///
/// Detached nodes stay in the arena, so every `NodeId` ever handed
/// out remains valid across re-renders.
#[derive(Debug, Default)]
pub struct MemorySurface {
    nodes: Vec<Node>,
    roots: HashMap<String, NodeId>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind: Some(kind),
            ..Node::default()
        });
        id
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Read-only lookup of a mount point that already exists, without
    /// the `&mut self` of [`Surface::root`].
    pub fn mount(&self, identifier: &str) -> Option<NodeId> {
        self.roots.get(identifier).copied()
    }

    /// What the event substrate would deliver when `node` is activated:
    /// the bound command, or `None` for non-controls.
    pub fn activate(&self, node: NodeId) -> Option<Command> {
        self.node(node).command.clone()
    }

    /// Walks the subtree under `node` and returns the first control
    /// bound to `command`. Lets tests and the kiosk demo "press" a
    /// button without tracking node ids across re-renders.
    pub fn find_control(&self, node: NodeId, command: &Command) -> Option<NodeId> {
        if self.node(node).command.as_ref() == Some(command) {
            return Some(node);
        }
        self.node(node)
            .children
            .clone()
            .into_iter()
            .find_map(|child| self.find_control(child, command))
    }

    /// Deterministic text projection of the subtree under `node`.
    ///
    /// Each direct child renders as one line; a container child joins
    /// its own children's fragments with single spaces. Two identical
    /// trees always project to identical strings, which is what the
    /// render-idempotence tests compare.
    pub fn render_text(&self, node: NodeId) -> String {
        self.node(node)
            .children
            .iter()
            .map(|child| self.line_fragment(*child))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn line_fragment(&self, id: NodeId) -> String {
        let node = self.node(id);
        match node.kind {
            Some(NodeKind::Container) => node
                .children
                .iter()
                .map(|child| self.line_fragment(*child))
                .collect::<Vec<_>>()
                .join(" "),
            Some(NodeKind::Image) => format!("[img {}]", node.alt_text),
            Some(NodeKind::Text) | None => node.text.clone(),
            Some(NodeKind::Button) => format!("[{}]", node.text),
        }
    }
}

impl Surface for MemorySurface {
    fn create_element(&mut self, kind: NodeKind) -> NodeId {
        self.alloc(kind)
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.node_mut(node).text = text.to_string();
    }

    fn set_image_source(&mut self, node: NodeId, uri: &str) {
        self.node_mut(node).image_source = uri.to_string();
    }

    fn set_alt_text(&mut self, node: NodeId, alt: &str) {
        self.node_mut(node).alt_text = alt.to_string();
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(parent).children.push(child);
    }

    fn clear_children(&mut self, node: NodeId) {
        self.node_mut(node).children.clear();
    }

    fn bind(&mut self, node: NodeId, command: Command) {
        self.node_mut(node).command = Some(command);
    }

    fn root(&mut self, identifier: &str) -> NodeId {
        if let Some(id) = self.roots.get(identifier) {
            return *id;
        }
        let id = self.alloc(NodeKind::Container);
        self.roots.insert(identifier.to_string(), id);
        id
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_stable() {
        let mut surface = MemorySurface::new();
        let a = surface.root("cart");
        let b = surface.root("cart");
        assert_eq!(a, b);

        let other = surface.root("sidebar");
        assert_ne!(a, other);
    }

    #[test]
    fn test_tree_building_and_projection() {
        let mut surface = MemorySurface::new();
        let root = surface.root("cart");

        let row = surface.create_element(NodeKind::Container);
        let img = surface.create_element(NodeKind::Image);
        surface.set_image_source(img, "http://example.tn/farine.png");
        surface.set_alt_text(img, "Farine");
        let name = surface.create_element(NodeKind::Text);
        surface.set_text(name, "Farine");
        surface.append_child(row, img);
        surface.append_child(row, name);
        surface.append_child(root, row);

        assert_eq!(surface.render_text(root), "[img Farine] Farine");
    }

    #[test]
    fn test_clear_children() {
        let mut surface = MemorySurface::new();
        let root = surface.root("cart");
        let text = surface.create_element(NodeKind::Text);
        surface.set_text(text, "stale");
        surface.append_child(root, text);

        surface.clear_children(root);
        assert_eq!(surface.render_text(root), "");
    }

    #[test]
    fn test_bind_and_activate() {
        let mut surface = MemorySurface::new();
        let button = surface.create_element(NodeKind::Button);
        surface.set_text(button, "+");
        surface.bind(button, Command::Increment("item1".into()));

        assert_eq!(
            surface.activate(button),
            Some(Command::Increment("item1".into()))
        );

        let text = surface.create_element(NodeKind::Text);
        assert_eq!(surface.activate(text), None);
    }

    #[test]
    fn test_find_control() {
        let mut surface = MemorySurface::new();
        let root = surface.root("cart");
        let row = surface.create_element(NodeKind::Container);
        let del = surface.create_element(NodeKind::Button);
        surface.set_text(del, "Delete");
        surface.bind(del, Command::Delete("item2".into()));
        surface.append_child(row, del);
        surface.append_child(root, row);

        let found = surface
            .find_control(root, &Command::Delete("item2".into()))
            .unwrap();
        assert_eq!(found, del);

        assert!(surface
            .find_control(root, &Command::Delete("item9".into()))
            .is_none());
    }
}
