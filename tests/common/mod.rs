//! Shared helpers for integration tests.

use std::sync::{Arc, Mutex};

use viewport_fit::config::{LogConfig, MarkerConfig, SinkKind};
use viewport_fit::dom::{Document, InlineStyle, NodeId};
use viewport_fit::logger::{AlertPresenter, BufferWriter, Logger};
use viewport_fit::{parse_html, ViewportAdjuster};

/// Adjuster with default markers logging to an in-memory console.
#[allow(dead_code)]
pub fn console_adjuster() -> (ViewportAdjuster, BufferWriter) {
    let out = BufferWriter::new();
    let logger = Logger::new(LogConfig::default())
        .unwrap()
        .with_console(out.clone());
    (ViewportAdjuster::new(MarkerConfig::default(), logger), out)
}

/// Adjuster logging into the elements matched by `selector`.
#[allow(dead_code)]
pub fn element_adjuster(selector: &str) -> ViewportAdjuster {
    let logger = Logger::new(LogConfig {
        enabled: true,
        sink: SinkKind::Element,
        target_selector: Some(selector.to_string()),
    })
    .unwrap();
    ViewportAdjuster::new(MarkerConfig::default(), logger)
}

/// Alert presenter that records instead of blocking.
#[allow(dead_code)]
#[derive(Default, Clone)]
pub struct RecordingAlert(pub Arc<Mutex<Vec<String>>>);

impl AlertPresenter for RecordingAlert {
    fn present(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

#[allow(dead_code)]
pub fn doc(html: &str) -> Document {
    parse_html(html).unwrap()
}

#[allow(dead_code)]
pub fn by_id(doc: &Document, id: &str) -> NodeId {
    doc.element_by_id(id)
        .unwrap_or_else(|| panic!("no element with id {id:?}"))
}

#[allow(dead_code)]
pub fn style(doc: &Document, id: &str) -> InlineStyle {
    doc.element(by_id(doc, id)).unwrap().style().clone()
}

/// Assert two floats agree within a small tolerance.
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
