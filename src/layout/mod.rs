//! Box measurement.
//!
//! # Responsibilities
//! - Report an element's current width and height the way a browser's
//!   computed content box would for simple block layout
//! - Resolve percentages against the containing block
//!
//! # Design Decisions
//! - Every element is treated as a block box; no inline formatting, floats
//!   or positioning
//! - Width: explicit length, else the containing block's width
//! - Height: explicit length, else the stacked outer heights of child
//!   elements, else the `data-height` intrinsic hint, else 0
//! - A percentage height only applies when the containing block's height is
//!   definite (px, a definite percentage, or the viewport); against an
//!   auto-height container it behaves as auto
//! - The root containing block is the viewport

use crate::dom::{Document, Length, NodeId};
use crate::viewport::Viewport;

/// Attribute giving the intrinsic content height of an auto-height element.
pub const INTRINSIC_HEIGHT_ATTR: &str = "data-height";

/// Measures boxes in a document against a viewport.
pub struct Measure<'a, V: Viewport + ?Sized> {
    doc: &'a Document,
    viewport: &'a V,
}

impl<'a, V: Viewport + ?Sized> Measure<'a, V> {
    pub fn new(doc: &'a Document, viewport: &'a V) -> Self {
        Self { doc, viewport }
    }

    /// Content width of `node` in px.
    pub fn width(&self, node: NodeId) -> f64 {
        let container = self.container_width(node);
        match self.doc.element(node).and_then(|e| e.style().width()) {
            Some(length) => length.resolve(container),
            None => container,
        }
    }

    /// Content height of `node` in px.
    pub fn height(&self, node: NodeId) -> f64 {
        let Some(element) = self.doc.element(node) else {
            return 0.0;
        };
        match element.style().height() {
            Some(Length::Px(px)) => return px,
            Some(length @ Length::Percent(_)) => {
                if let Some(container) = self.definite_container_height(node) {
                    return length.resolve(container);
                }
            }
            None => {}
        }

        let mut children = self.doc.child_elements(node).peekable();
        if children.peek().is_some() {
            return children.map(|child| self.outer_height(child)).sum();
        }

        element
            .attr(INTRINSIC_HEIGHT_ATTR)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|h| h.is_finite() && *h >= 0.0)
            .unwrap_or(0.0)
    }

    /// Height plus top margin, as stacked inside the parent.
    pub fn outer_height(&self, node: NodeId) -> f64 {
        let margin = self
            .doc
            .element(node)
            .and_then(|e| e.style().margin_top())
            .map(|m| m.resolve(self.container_width(node)))
            .unwrap_or(0.0);
        self.height(node) + margin
    }

    fn container_width(&self, node: NodeId) -> f64 {
        match self.doc.parent_element(node) {
            Some(parent) => self.width(parent),
            None => self.viewport.width(),
        }
    }

    /// Height of `node` if it does not depend on its content.
    ///
    /// Only walks up the tree, so it terminates even when the content height
    /// would in turn depend on `node`.
    fn definite_height(&self, node: NodeId) -> Option<f64> {
        match self.doc.element(node)?.style().height()? {
            Length::Px(px) => Some(px),
            length @ Length::Percent(_) => self
                .definite_container_height(node)
                .map(|container| length.resolve(container)),
        }
    }

    fn definite_container_height(&self, node: NodeId) -> Option<f64> {
        match self.doc.parent_element(node) {
            Some(parent) => self.definite_height(parent),
            None => Some(self.viewport.height()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;
    use crate::viewport::ViewportSize;

    const VIEWPORT: ViewportSize = ViewportSize {
        width: 1000.0,
        height: 500.0,
    };

    #[test]
    fn test_width_resolution() {
        let doc = parse_html(
            r#"<div id="a" style="width: 320px"><div id="b"></div><div id="c" style="width: 50%"></div></div><div id="d"></div>"#,
        )
        .unwrap();
        let measure = Measure::new(&doc, &VIEWPORT);
        let id = |s: &str| doc.element_by_id(s).unwrap();
        assert_eq!(measure.width(id("a")), 320.0);
        assert_eq!(measure.width(id("b")), 320.0);
        assert_eq!(measure.width(id("c")), 160.0);
        assert_eq!(measure.width(id("d")), 1000.0);
    }

    #[test]
    fn test_height_resolution() {
        let doc = parse_html(
            r#"<div id="p" style="height: 400px"><div id="q" style="height: 25%"></div></div><div id="auto"><div style="height: 30px; margin-top: 5px"></div><div data-height="20"></div></div><div id="empty"></div>"#,
        )
        .unwrap();
        let measure = Measure::new(&doc, &VIEWPORT);
        let id = |s: &str| doc.element_by_id(s).unwrap();
        assert_eq!(measure.height(id("p")), 400.0);
        assert_eq!(measure.height(id("q")), 100.0);
        assert_eq!(measure.height(id("auto")), 55.0);
        assert_eq!(measure.height(id("empty")), 0.0);
    }

    #[test]
    fn test_html_percent_height_uses_viewport() {
        let doc = parse_html(r#"<html style="height: 100%"><body style="height: 50%"></body></html>"#)
            .unwrap();
        let measure = Measure::new(&doc, &VIEWPORT);
        let body = doc.elements().find(|&n| doc.element(n).unwrap().name() == "body").unwrap();
        assert_eq!(measure.height(body), 250.0);
    }

    #[test]
    fn test_percent_height_in_auto_parent_is_auto() {
        let doc = parse_html(
            r#"<section id="s"><div id="d" style="height: 100%"><h1 id="h" style="height: 80px">t</h1></div></section><div id="fixed" style="height: 200px"><div style="height: 50%"><div id="nested" style="height: 50%"></div></div></div>"#,
        )
        .unwrap();
        let measure = Measure::new(&doc, &VIEWPORT);
        let id = |s: &str| doc.element_by_id(s).unwrap();
        assert_eq!(measure.height(id("h")), 80.0);
        assert_eq!(measure.height(id("d")), 80.0);
        assert_eq!(measure.height(id("s")), 80.0);
        assert_eq!(measure.height(id("nested")), 50.0);
    }
}
