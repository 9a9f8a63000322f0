//! Snap functionality for aligning dragged elements to the grid and to
//! sibling geometry.

use crate::breakpoint::Breakpoint;
use crate::element::{Element, ElementId};
use kurbo::{Point, Rect, Size};

/// Default grid cell size for snapping (matches the visual grid).
pub const DEFAULT_GRID_SIZE: f64 = 10.0;

/// Distance threshold for guide snapping, per axis, in canvas pixels.
pub const SNAP_TOLERANCE: f64 = 10.0;

/// Result of a snap operation.
#[derive(Debug, Clone, Copy)]
pub struct SnapResult {
    /// The snapped point.
    pub point: Point,
    /// Whether the X coordinate was pulled to a grid line or guide.
    pub snapped_x: bool,
    /// Whether the Y coordinate was pulled to a grid line or guide.
    pub snapped_y: bool,
}

impl SnapResult {
    /// Create a result with no snapping (coordinates still rounded).
    pub fn free(point: Point) -> Self {
        Self {
            point: Point::new(point.x.round(), point.y.round()),
            snapped_x: false,
            snapped_y: false,
        }
    }

    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// A coordinate that pointer input may be pulled toward.
#[derive(Debug, Clone, Copy)]
pub struct SnapTarget {
    /// The snap point location.
    pub point: Point,
    /// Type of snap target for visual guide feedback.
    pub kind: SnapTargetKind,
}

/// Type of snap target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapTargetKind {
    /// Corner of an element or of the canvas.
    Corner,
    /// Midpoint of an edge.
    Midpoint,
    /// Center of an element or of the canvas.
    Center,
}

/// Snap a point to the nearest grid intersection.
pub fn snap_to_grid(point: Point, grid_size: f64) -> Point {
    Point::new(
        (point.x / grid_size).round() * grid_size,
        (point.y / grid_size).round() * grid_size,
    )
}

/// Snap a raw canvas point against the grid and a set of guide candidates.
///
/// With snapping disabled, or a degenerate grid (`grid_size <= 1`), the point
/// passes through rounded to whole pixels. Otherwise each axis first snaps
/// to the nearest grid multiple, then any candidate within
/// [`SNAP_TOLERANCE`] of the raw input on that axis overrides it; when
/// several candidates qualify the nearest one wins, so the result does not
/// depend on candidate order.
pub fn snap_point(
    point: Point,
    grid_size: f64,
    candidates: &[SnapTarget],
    enabled: bool,
) -> SnapResult {
    if !enabled || grid_size <= 1.0 {
        return SnapResult::free(point);
    }

    let grid = snap_to_grid(point, grid_size);
    let mut result = SnapResult {
        point: grid,
        snapped_x: true,
        snapped_y: true,
    };

    // Guide snapping beats grid snapping; proximity is measured against the
    // raw input, not the grid-adjusted value.
    let mut best_dx = SNAP_TOLERANCE;
    let mut best_dy = SNAP_TOLERANCE;
    for candidate in candidates {
        let dx = (point.x - candidate.point.x).abs();
        if dx <= best_dx {
            best_dx = dx;
            result.point.x = candidate.point.x;
        }
        let dy = (point.y - candidate.point.y).abs();
        if dy <= best_dy {
            best_dy = dy;
            result.point.y = candidate.point.y;
        }
    }

    result
}

/// The nine guide points of a bounding box: corners, edge midpoints, center.
pub fn targets_from_bounds(bounds: Rect) -> Vec<SnapTarget> {
    let cx = (bounds.x0 + bounds.x1) / 2.0;
    let cy = (bounds.y0 + bounds.y1) / 2.0;
    vec![
        SnapTarget { point: Point::new(bounds.x0, bounds.y0), kind: SnapTargetKind::Corner },
        SnapTarget { point: Point::new(bounds.x1, bounds.y0), kind: SnapTargetKind::Corner },
        SnapTarget { point: Point::new(bounds.x1, bounds.y1), kind: SnapTargetKind::Corner },
        SnapTarget { point: Point::new(bounds.x0, bounds.y1), kind: SnapTargetKind::Corner },
        SnapTarget { point: Point::new(cx, bounds.y0), kind: SnapTargetKind::Midpoint },
        SnapTarget { point: Point::new(bounds.x1, cy), kind: SnapTargetKind::Midpoint },
        SnapTarget { point: Point::new(cx, bounds.y1), kind: SnapTargetKind::Midpoint },
        SnapTarget { point: Point::new(bounds.x0, cy), kind: SnapTargetKind::Midpoint },
        SnapTarget { point: Point::new(cx, cy), kind: SnapTargetKind::Center },
    ]
}

/// Collect every guide candidate for a drag at one breakpoint: the canvas
/// edges/midpoints plus the bounds of every sibling element, skipping the
/// element being dragged.
pub fn collect_snap_targets(
    canvas: Size,
    elements: &[Element],
    breakpoint: Breakpoint,
    exclude: Option<ElementId>,
) -> Vec<SnapTarget> {
    let mut targets = targets_from_bounds(Rect::new(0.0, 0.0, canvas.width, canvas.height));
    for element in elements {
        if Some(element.id) == exclude || !element.visible {
            continue;
        }
        targets.extend(targets_from_bounds(element.bounds(breakpoint)));
    }
    targets
}
