//! Viewport dimensions.
//!
//! The adjuster never caches dimensions; it asks the [`Viewport`] every time
//! it needs one, so a [`SharedViewport`] updated by the event loop is always
//! observed live.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Live query of the visible rendering area, in px.
pub trait Viewport {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
}

impl<V: Viewport + ?Sized> Viewport for &V {
    fn width(&self) -> f64 {
        (**self).width()
    }

    fn height(&self) -> f64 {
        (**self).height()
    }
}

/// Fixed viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Viewport for ViewportSize {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}

impl fmt::Display for ViewportSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Error for viewport strings that are not `WIDTHxHEIGHT`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid viewport {0:?}: expected WIDTHxHEIGHT with non-negative numbers, e.g. 1000x500")]
pub struct ViewportParseError(pub String);

impl FromStr for ViewportSize {
    type Err = ViewportParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ViewportParseError(s.to_string());
        let (w, h) = s
            .trim()
            .split_once(|c: char| c == 'x' || c == 'X')
            .ok_or_else(err)?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite() && *n >= 0.0)
                .ok_or_else(err)
        };
        Ok(Self::new(parse(w)?, parse(h)?))
    }
}

/// Viewport handle shared between the event source and the adjuster.
///
/// Cloning shares the same underlying dimensions. Updates are lock-free.
#[derive(Debug, Clone)]
pub struct SharedViewport {
    inner: Arc<ArcSwap<ViewportSize>>,
}

impl SharedViewport {
    pub fn new(size: ViewportSize) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(size)),
        }
    }

    /// Replace the current dimensions.
    pub fn set(&self, size: ViewportSize) {
        self.inner.store(Arc::new(size));
    }

    /// Current dimensions.
    pub fn size(&self) -> ViewportSize {
        **self.inner.load()
    }
}

impl Viewport for SharedViewport {
    fn width(&self) -> f64 {
        self.inner.load().width
    }

    fn height(&self) -> f64 {
        self.inner.load().height
    }
}
