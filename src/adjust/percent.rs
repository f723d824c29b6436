//! Viewport-percentage sizing (`data-vh`, `data-vw`).

use crate::adjust::{AdjustIssue, Pass};
use crate::dom::Length;
use crate::viewport::Viewport;

/// Which dimension a percentage pass sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Height,
    Width,
}

impl Axis {
    /// Attribute holding the percentage.
    pub fn attribute(self) -> &'static str {
        match self {
            Axis::Height => "data-vh",
            Axis::Width => "data-vw",
        }
    }

    /// Unit suffix used in log messages.
    pub fn unit(self) -> &'static str {
        match self {
            Axis::Height => "vh",
            Axis::Width => "vw",
        }
    }

    fn extent<V: Viewport + ?Sized>(self, viewport: &V) -> f64 {
        match self {
            Axis::Height => viewport.height(),
            Axis::Width => viewport.width(),
        }
    }
}

/// Parse a percentage attribute value.
///
/// Valid values are finite numbers `>= 0`, surrounding whitespace allowed.
/// Zero is valid and collapses the element.
pub fn parse_percent(raw: Option<&str>) -> Option<f64> {
    raw?.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

pub(super) fn run<V: Viewport + ?Sized>(pass: &mut Pass<'_>, marker: &str, axis: Axis, viewport: &V) {
    let attribute = axis.attribute();

    for node in pass.doc.elements_with_class(marker) {
        let raw = pass.doc.attr(node, attribute).map(str::to_string);

        let Some(percent) = parse_percent(raw.as_deref()) else {
            pass.skip(
                node,
                AdjustIssue::InvalidConfiguration {
                    attribute,
                    value: raw,
                },
            );
            continue;
        };

        let shown = raw.as_deref().map(str::trim).unwrap_or_default();
        pass.log(&format!("resizing element to {shown}{}", axis.unit()));

        let px = Length::Px(axis.extent(viewport) * (percent / 100.0));
        if let Some(element) = pass.doc.element_mut(node) {
            element.update_style(|style| match axis {
                Axis::Height => style.set_height(px),
                Axis::Width => style.set_width(px),
            });
        }
        tracing::debug!(node = ?node, %px, attribute, "Element resized");
        pass.applied();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent(Some("50")), Some(50.0));
        assert_eq!(parse_percent(Some(" 12.5 ")), Some(12.5));
        assert_eq!(parse_percent(Some("0")), Some(0.0));
        assert_eq!(parse_percent(Some("-5")), None);
        assert_eq!(parse_percent(Some("abc")), None);
        assert_eq!(parse_percent(Some("")), None);
        assert_eq!(parse_percent(Some("inf")), None);
        assert_eq!(parse_percent(Some("NaN")), None);
        assert_eq!(parse_percent(None), None);
    }
}
