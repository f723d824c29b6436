//! HTML serialization of a [`Document`].

use std::fmt::Write as _;

use crate::dom::{Document, NodeData, NodeId};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "xmp", "iframe", "noembed", "noframes"];

impl Document {
    /// Serialize the whole document back to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for child in self.root.children(self.arena()) {
            self.write_node(&mut out, child, false);
        }
        out
    }

    fn write_node(&self, out: &mut String, node: NodeId, raw_text: bool) {
        let Some(data) = self.data(node) else {
            return;
        };
        match data {
            NodeData::Document => {}
            NodeData::Doctype(name) => {
                let _ = write!(out, "<!DOCTYPE {name}>");
            }
            NodeData::Text(text) if raw_text => out.push_str(text),
            NodeData::Text(text) => escape_into(out, text, false),
            NodeData::Comment(text) => {
                let _ = write!(out, "<!--{text}-->");
            }
            NodeData::Element(element) => {
                let name = element.name();
                out.push('<');
                out.push_str(name);
                for (key, value) in element.attrs() {
                    let _ = write!(out, " {key}=\"");
                    escape_into(out, value, true);
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&name) {
                    return;
                }
                let raw = RAW_TEXT_ELEMENTS.contains(&name);
                for child in node.children(self.arena()) {
                    self.write_node(out, child, raw);
                }
                let _ = write!(out, "</{name}>");
            }
        }
    }
}

fn escape_into(out: &mut String, text: &str, attribute: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' if attribute => out.push_str("&quot;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::{parse_html, Length};

    #[test]
    fn test_round_trip_preserves_markup() {
        let html = r#"<!DOCTYPE html><html><head><style>a > b {}</style></head><body><!-- c --><p title="a &quot;b&quot;">x &lt; y<br></p></body></html>"#;
        let doc = parse_html(html).unwrap();
        assert_eq!(doc.to_html(), html);
    }

    #[test]
    fn test_serializes_updated_style() {
        let mut doc = parse_html(r#"<div id="v" class="js-vh" data-vh="50"></div>"#).unwrap();
        let v = doc.element_by_id("v").unwrap();
        doc.element_mut(v)
            .unwrap()
            .update_style(|s| s.set_height(Length::Px(250.0)));
        assert!(doc
            .to_html()
            .contains(r#"<div id="v" class="js-vh" data-vh="50" style="height: 250px"></div>"#));
    }
}
