//! Viewport module for pointer-to-canvas coordinate transforms.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Zoom level that corresponds to "100%" in the UI.
pub const BASE_ZOOM_PERCENT: f64 = 100.0;

/// Minimum allowed zoom percentage.
pub const MIN_ZOOM_PERCENT: f64 = 10.0;
/// Maximum allowed zoom percentage.
pub const MAX_ZOOM_PERCENT: f64 = 400.0;

/// Convert a pointer position in screen coordinates into canvas-local
/// coordinates given the canvas container's screen rect and the zoom level.
///
/// The result is rounded to whole pixels and is deliberately not clamped to
/// be non-negative: an element dragged partially outside its container has a
/// valid negative offset.
///
/// A missing container rect is a defensive fallback, not a business error:
/// the transform logs the condition and returns the origin so the editor
/// never blocks on it.
pub fn to_canvas_space(
    pointer_x: f64,
    pointer_y: f64,
    container: Option<Rect>,
    zoom_percent: f64,
) -> Point {
    let Some(rect) = container else {
        log::warn!("to_canvas_space called without a container rect; returning origin");
        return Point::ZERO;
    };

    let scale = zoom_scale(zoom_percent);
    Point::new(
        ((pointer_x - rect.x0) / scale).round(),
        ((pointer_y - rect.y0) / scale).round(),
    )
}

/// Normalize a zoom percentage into a multiplicative scale.
///
/// Non-positive or non-finite zoom values fall back to 100%.
fn zoom_scale(zoom_percent: f64) -> f64 {
    if zoom_percent.is_finite() && zoom_percent > 0.0 {
        zoom_percent / 100.0
    } else {
        1.0
    }
}

/// Viewport manages the mapping between pointer/screen space and canvas
/// space for one canvas container.
///
/// It owns the container's screen rect, the container's scroll offset, and
/// the zoom level, and converts pointer positions into canvas-local
/// coordinates for drag/drop handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewport {
    /// Screen rect of the canvas container, if currently mounted.
    pub container: Option<Rect>,
    /// Scroll offset of the container content, in screen pixels.
    pub scroll: Vec2,
    /// Current zoom percentage (100.0 = 1:1).
    pub zoom_percent: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            container: None,
            scroll: Vec2::ZERO,
            zoom_percent: BASE_ZOOM_PERCENT,
        }
    }
}

impl Viewport {
    /// Create a viewport with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a pointer position to canvas-local coordinates.
    ///
    /// The scroll offset is applied in screen space before the zoom division,
    /// matching how a scrolled, zoomed container reports pointer positions.
    pub fn to_canvas(&self, pointer: Point) -> Point {
        to_canvas_space(
            pointer.x + self.scroll.x,
            pointer.y + self.scroll.y,
            self.container,
            self.zoom_percent,
        )
    }

    /// Set the zoom percentage, clamped to the allowed range.
    pub fn set_zoom(&mut self, zoom_percent: f64) {
        let zoom = if zoom_percent.is_finite() {
            zoom_percent
        } else {
            BASE_ZOOM_PERCENT
        };
        self.zoom_percent = zoom.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT);
    }

    /// Update the container rect (e.g. after a window resize).
    pub fn set_container(&mut self, rect: Option<Rect>) {
        self.container = rect;
    }
}
