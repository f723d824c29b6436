//! In-memory document tree.
//!
//! # Data Flow
//! ```text
//! HTML text
//!     → parse.rs (html5ever → arena nodes)
//!     → Document (elements, attributes, inline style)
//!     → query.rs / selector.rs (marker classes, log targets)
//!     → adjust passes mutate inline style
//!     → serialize.rs (arena nodes → HTML text)
//! ```
//!
//! # Design Decisions
//! - Nodes live in an `indextree` arena; `NodeId` handles are cheap to copy
//!   and stay valid for the life of the document
//! - The `style` attribute is parsed once into `InlineStyle` and rewritten
//!   whenever the style changes, so attribute order is preserved
//! - Only the four node kinds the adjuster cares about are modelled

pub mod parse;
pub mod query;
pub mod selector;
pub mod serialize;
pub mod style;

use indextree::Arena;

pub use indextree::NodeId;
pub use parse::{parse_html, DomError};
pub use selector::{Selector, SelectorError};
pub use style::{InlineStyle, Length};

/// Payload of a single node in the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    /// The document root. Exactly one per tree.
    Document,
    /// `<!DOCTYPE name>`.
    Doctype(String),
    Element(ElementData),
    Text(String),
    Comment(String),
}

/// An element: tag name, ordered attributes and the parsed inline style.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementData {
    name: String,
    attrs: Vec<(String, String)>,
    style: InlineStyle,
}

impl ElementData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            attrs: Vec::new(),
            style: InlineStyle::default(),
        }
    }

    /// Lowercase tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set or replace an attribute. Setting `style` reparses the inline style.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let name = name.to_ascii_lowercase();
        let value = value.into();
        if name == "style" {
            self.style = InlineStyle::parse(&value);
        }
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Whitespace-separated entries of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_ascii_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    /// Mutate the inline style and write it back to the `style` attribute.
    pub fn update_style(&mut self, f: impl FnOnce(&mut InlineStyle)) {
        f(&mut self.style);
        let css = self.style.to_css();
        match self.attrs.iter_mut().find(|(key, _)| key == "style") {
            Some(slot) => slot.1 = css,
            None => self.attrs.push(("style".to_string(), css)),
        }
    }
}

/// A parsed document backed by an arena of nodes.
#[derive(Debug, Clone)]
pub struct Document {
    arena: Arena<NodeData>,
    root: NodeId,
}

impl Document {
    /// Create an empty document holding only the root node.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(NodeData::Document);
        Self { arena, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Payload of `node`, or `None` if the id belongs to another document.
    pub fn data(&self, node: NodeId) -> Option<&NodeData> {
        self.arena.get(node).map(|n| n.get())
    }

    pub fn element(&self, node: NodeId) -> Option<&ElementData> {
        match self.data(node)? {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut ElementData> {
        match self.arena.get_mut(node)?.get_mut() {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.attr(name)
    }

    /// Create a detached element. Attach it with [`Document::append`].
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.arena.new_node(NodeData::Element(ElementData::new(name)))
    }

    /// Create a detached node with arbitrary payload.
    pub fn create_node(&mut self, data: NodeData) -> NodeId {
        self.arena.new_node(data)
    }

    /// Append `child` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        parent.append(child, &mut self.arena);
    }

    /// Append a text node holding `text` to `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        let node = self.arena.new_node(NodeData::Text(text.to_string()));
        parent.append(node, &mut self.arena);
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, node: NodeId) -> String {
        node.descendants(&self.arena)
            .filter_map(|id| match self.data(id) {
                Some(NodeData::Text(text)) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn arena(&self) -> &Arena<NodeData> {
        &self.arena
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
