//! HTML parsing using html5ever.

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use thiserror::Error;

use crate::dom::{Document, ElementData, NodeData, NodeId};

/// Errors raised while building a document.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("failed to read HTML input: {0}")]
    Read(#[from] std::io::Error),
}

/// Parse an HTML document into an arena-backed [`Document`].
///
/// The html5ever tree builder inserts the implied `html`, `head` and `body`
/// elements, so fragments come back wrapped the same way a browser would.
pub fn parse_html(html: &str) -> Result<Document, DomError> {
    let dom: RcDom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?;

    let mut doc = Document::new();
    let root = doc.root();
    for child in dom.document.children.borrow().iter() {
        convert_node(&mut doc, child, root);
    }

    tracing::debug!(elements = doc.elements().count(), "Parsed HTML document");
    Ok(doc)
}

fn convert_node(doc: &mut Document, handle: &Handle, parent: NodeId) {
    let data = match &handle.data {
        RcNodeData::Doctype { name, .. } => NodeData::Doctype(name.to_string()),
        RcNodeData::Text { contents } => NodeData::Text(contents.borrow().to_string()),
        RcNodeData::Comment { contents } => NodeData::Comment(contents.to_string()),
        RcNodeData::Element { name, attrs, .. } => {
            let mut element = ElementData::new(name.local.to_string());
            for attr in attrs.borrow().iter() {
                element.set_attr(&attr.name.local, attr.value.to_string());
            }
            NodeData::Element(element)
        }
        RcNodeData::Document | RcNodeData::ProcessingInstruction { .. } => return,
    };

    let node = doc.create_node(data);
    doc.append(parent, node);

    for child in handle.children.borrow().iter() {
        convert_node(doc, child, node);
    }
}
