//! 16:9 letterbox sizing.

use crate::adjust::Pass;
use crate::dom::Length;
use crate::layout::Measure;
use crate::viewport::Viewport;

/// Height over width of a letterbox.
pub const ASPECT: f64 = 9.0 / 16.0;

pub(super) fn run<V: Viewport + ?Sized>(pass: &mut Pass<'_>, marker: &str, viewport: &V) {
    for node in pass.doc.elements_with_class(marker) {
        let Some(element) = pass.doc.element_mut(node) else {
            continue;
        };
        element.update_style(|style| style.set_width(Length::Percent(100.0)));

        let width = Measure::new(pass.doc, viewport).width(node);
        if let Some(element) = pass.doc.element_mut(node) {
            element.update_style(|style| style.set_height(Length::Px(width * ASPECT)));
        }

        let measure = Measure::new(pass.doc, viewport);
        let ratio = measure.width(node) / measure.height(node);
        tracing::debug!(node = ?node, width, ratio, "Letterbox applied");
        pass.log(&format!("calculated ratio: {ratio}"));
        pass.applied();
    }
}
