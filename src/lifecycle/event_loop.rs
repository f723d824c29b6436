//! Ready/resize event processing.
//!
//! # Responsibilities
//! - Own the document for the lifetime of the page
//! - Apply viewport events strictly in arrival order
//! - Run each adjustment to completion before taking the next event
//!
//! # Design Decisions
//! - Single consumer task: invocations can never overlap
//! - Resize updates the shared viewport before adjusting, so the run sees
//!   the dimensions of the event that triggered it
//! - Optional coalescing only drops resizes that are already queued behind
//!   a newer resize; the last run always reflects the latest dimensions

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::adjust::{AdjustSummary, ViewportAdjuster};
use crate::dom::Document;
use crate::viewport::{SharedViewport, ViewportSize};

/// Events delivered by the hosting environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ViewportEvent {
    /// Document finished loading.
    Ready,
    /// Viewport changed to the given dimensions.
    Resize { width: f64, height: f64 },
}

impl ViewportEvent {
    pub fn resize(size: ViewportSize) -> Self {
        ViewportEvent::Resize {
            width: size.width,
            height: size.height,
        }
    }
}

/// Outcome of one adjustment run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub event: ViewportEvent,
    pub viewport: ViewportSize,
    pub summary: AdjustSummary,
    /// Resize events folded into this run by coalescing.
    pub coalesced: usize,
}

/// Sequential consumer of [`ViewportEvent`]s.
#[derive(Debug)]
pub struct EventLoop {
    document: Document,
    adjuster: ViewportAdjuster,
    viewport: SharedViewport,
    coalesce_resize: bool,
}

impl EventLoop {
    pub fn new(document: Document, adjuster: ViewportAdjuster, viewport: SharedViewport) -> Self {
        Self {
            document,
            adjuster,
            viewport,
            coalesce_resize: false,
        }
    }

    /// Collapse queued resize bursts into their last event.
    pub fn coalesce_resize(mut self, enabled: bool) -> Self {
        self.coalesce_resize = enabled;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Apply one event immediately.
    pub fn handle(&mut self, event: ViewportEvent) -> RunRecord {
        self.apply(event, 0)
    }

    /// Consume events until the sender side closes, then hand back the
    /// document and a record per run.
    pub async fn run(mut self, mut events: mpsc::Receiver<ViewportEvent>) -> (Document, Vec<RunRecord>) {
        tracing::info!(
            viewport = %self.viewport.size(),
            coalesce_resize = self.coalesce_resize,
            "Event loop starting"
        );

        let mut pending = VecDeque::new();
        let mut records = Vec::new();

        loop {
            let event = match pending.pop_front() {
                Some(event) => event,
                None => match events.recv().await {
                    Some(event) => event,
                    None => break,
                },
            };

            let (event, coalesced) = match event {
                ViewportEvent::Resize { .. } if self.coalesce_resize => {
                    coalesce(event, &mut events, &mut pending)
                }
                event => (event, 0),
            };

            records.push(self.apply(event, coalesced));
        }

        tracing::info!(runs = records.len(), "Event loop finished");
        (self.document, records)
    }

    fn apply(&mut self, event: ViewportEvent, coalesced: usize) -> RunRecord {
        if let ViewportEvent::Resize { width, height } = event {
            self.viewport.set(ViewportSize::new(width, height));
        }

        let summary = self.adjuster.adjust(&mut self.document, &self.viewport);
        let viewport = self.viewport.size();
        tracing::info!(
            ?event,
            %viewport,
            applied = summary.applied,
            skipped = summary.skipped,
            coalesced,
            "Viewport adjusted"
        );

        RunRecord {
            event,
            viewport,
            summary,
            coalesced,
        }
    }
}

/// Fold already-queued resizes into `latest`.
///
/// Stops at the first non-resize event, which is parked in `pending` so it
/// still runs after the coalesced resize.
fn coalesce(
    mut latest: ViewportEvent,
    events: &mut mpsc::Receiver<ViewportEvent>,
    pending: &mut VecDeque<ViewportEvent>,
) -> (ViewportEvent, usize) {
    let mut folded = 0;
    while let Ok(next) = events.try_recv() {
        match next {
            ViewportEvent::Resize { .. } => {
                latest = next;
                folded += 1;
            }
            other => {
                pending.push_back(other);
                break;
            }
        }
    }
    (latest, folded)
}
