//! Tree navigation and element queries.

use crate::dom::{Document, NodeId, Selector};

impl Document {
    /// Elements under the root, in document order.
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.root
            .descendants(self.arena())
            .filter(move |&id| self.element(id).is_some())
    }

    /// Elements carrying `class` in their class list, in document order.
    ///
    /// The result is collected up front so callers can mutate the document
    /// while walking it.
    pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.elements()
            .filter(|&id| self.element(id).is_some_and(|e| e.has_class(class)))
            .collect()
    }

    /// Elements matching `selector`, in document order.
    pub fn select(&self, selector: &Selector) -> Vec<NodeId> {
        self.elements()
            .filter(|&id| selector.matches(self, id))
            .collect()
    }

    /// First element whose `id` attribute equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements()
            .find(|&node| self.element(node).and_then(|e| e.id()) == Some(id))
    }

    /// Parent node if it is an element. The document root is not an element.
    pub fn parent_element(&self, node: NodeId) -> Option<NodeId> {
        node.parent(self.arena())
            .filter(|&parent| self.element(parent).is_some())
    }

    /// Element children of `node`.
    pub fn child_elements(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node.children(self.arena())
            .filter(move |&id| self.element(id).is_some())
    }

    /// Other elements sharing this node's parent. Text nodes are not siblings.
    pub fn sibling_elements(&self, node: NodeId) -> Vec<NodeId> {
        match node.parent(self.arena()) {
            Some(parent) => self
                .child_elements(parent)
                .filter(|&id| id != node)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::parse_html;

    #[test]
    fn test_marker_query_in_document_order() {
        let doc = parse_html(
            r#"<div id="a" class="js-vh"></div><div id="b"><span id="c" class="x js-vh"></span></div><div id="d" class="js-vhx"></div>"#,
        )
        .unwrap();
        let found: Vec<_> = doc
            .elements_with_class("js-vh")
            .into_iter()
            .map(|n| doc.attr(n, "id").unwrap())
            .collect();
        assert_eq!(found, vec!["a", "c"]);
    }

    #[test]
    fn test_siblings_ignore_text() {
        let doc = parse_html(r#"<div id="p">  text <span id="only"></span> more </div>"#).unwrap();
        let only = doc.element_by_id("only").unwrap();
        assert!(doc.sibling_elements(only).is_empty());
        assert_eq!(doc.parent_element(only), doc.element_by_id("p"));

        let doc = parse_html(r#"<div><span id="x"></span><em id="y"></em></div>"#).unwrap();
        let x = doc.element_by_id("x").unwrap();
        assert_eq!(doc.sibling_elements(x), vec![doc.element_by_id("y").unwrap()]);
    }
}
