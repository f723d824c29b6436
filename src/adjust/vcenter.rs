//! Vertical centering by top margin.
//!
//! Assumes a positioning context where a top margin actually offsets the
//! element inside its parent; that is left to the page author.

use crate::adjust::{AdjustIssue, Pass};
use crate::dom::Length;
use crate::layout::Measure;
use crate::viewport::Viewport;

pub(super) fn run<V: Viewport + ?Sized>(pass: &mut Pass<'_>, marker: &str, viewport: &V) {
    for node in pass.doc.elements_with_class(marker) {
        let Some(parent) = pass.doc.parent_element(node) else {
            pass.skip(node, AdjustIssue::NoParent);
            continue;
        };

        if !pass.doc.sibling_elements(node).is_empty() {
            pass.warn("element has siblings; vertical centering may not work correctly.");
        }

        let measure = Measure::new(pass.doc, viewport);
        let parent_height = measure.height(parent);
        let element_height = measure.height(node);
        pass.log(&format!("parent height: {parent_height}"));
        pass.log(&format!("element height: {element_height}"));

        if parent_height <= element_height {
            pass.skip(
                node,
                AdjustIssue::TallerThanParent {
                    parent_height,
                    element_height,
                },
            );
            continue;
        }

        let margin = Length::Px((parent_height - element_height) / 2.0);
        if let Some(element) = pass.doc.element_mut(node) {
            element.update_style(|style| style.set_margin_top(margin));
        }
        tracing::debug!(node = ?node, %margin, "Element centered");
        pass.applied();
    }
}

#[cfg(test)]
mod tests {
    use crate::adjust::ViewportAdjuster;
    use crate::config::{LogConfig, MarkerConfig};
    use crate::dom::Document;
    use crate::logger::{BufferWriter, Logger};
    use crate::viewport::ViewportSize;

    #[test]
    fn test_element_without_parent_element_is_skipped() {
        let out = BufferWriter::new();
        let logger = Logger::new(LogConfig::default())
            .unwrap()
            .with_console(out.clone());
        let adjuster = ViewportAdjuster::new(MarkerConfig::default(), logger);

        let mut doc = Document::new();
        let node = doc.create_element("div");
        doc.element_mut(node)
            .unwrap()
            .set_attr("class", "js-margin-vcenter");
        let root = doc.root();
        doc.append(root, node);

        let summary = adjuster.adjust(&mut doc, &ViewportSize::new(1000.0, 500.0));

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.applied, 0);
        assert_eq!(
            out.lines(),
            vec!["vertical center not possible.  element has no parent element."]
        );
        assert_eq!(doc.element(node).unwrap().style().margin_top(), None);
        assert_eq!(doc.element(node).unwrap().attr("style"), None);
    }
}
