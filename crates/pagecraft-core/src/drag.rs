//! Drag and resize manipulation state for canvas interactions.

use crate::breakpoint::Breakpoint;
use crate::element::{Element, ElementId, Position};
use kurbo::{Point, Rect, Size, Vec2};

/// Handle hit tolerance in canvas pixels.
pub const HANDLE_HIT_TOLERANCE: f64 = 8.0;

/// Corner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Edge positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// What part of an element a drag grabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// The element body; drags translate.
    Move,
    /// A corner handle; drags resize both axes.
    Corner(Corner),
    /// An edge midpoint handle; drags resize one axis.
    Edge(Edge),
}

/// A manipulation handle with its canvas position.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    pub position: Point,
    pub kind: HandleKind,
}

/// The eight resize handles of an element at a breakpoint.
pub fn get_handles(element: &Element, breakpoint: Breakpoint) -> Vec<Handle> {
    let bounds = element.bounds(breakpoint);
    let cx = (bounds.x0 + bounds.x1) / 2.0;
    let cy = (bounds.y0 + bounds.y1) / 2.0;
    vec![
        Handle { position: Point::new(bounds.x0, bounds.y0), kind: HandleKind::Corner(Corner::TopLeft) },
        Handle { position: Point::new(bounds.x1, bounds.y0), kind: HandleKind::Corner(Corner::TopRight) },
        Handle { position: Point::new(bounds.x0, bounds.y1), kind: HandleKind::Corner(Corner::BottomLeft) },
        Handle { position: Point::new(bounds.x1, bounds.y1), kind: HandleKind::Corner(Corner::BottomRight) },
        Handle { position: Point::new(cx, bounds.y0), kind: HandleKind::Edge(Edge::Top) },
        Handle { position: Point::new(bounds.x1, cy), kind: HandleKind::Edge(Edge::Right) },
        Handle { position: Point::new(cx, bounds.y1), kind: HandleKind::Edge(Edge::Bottom) },
        Handle { position: Point::new(bounds.x0, cy), kind: HandleKind::Edge(Edge::Left) },
    ]
}

/// Find the handle under a point, if any. Falls back to `Move` when the
/// point is inside the element body.
pub fn hit_test_handles(element: &Element, point: Point, breakpoint: Breakpoint) -> Option<HandleKind> {
    for handle in get_handles(element, breakpoint) {
        let dx = (point.x - handle.position.x).abs();
        let dy = (point.y - handle.position.y).abs();
        if dx <= HANDLE_HIT_TOLERANCE && dy <= HANDLE_HIT_TOLERANCE {
            return Some(handle.kind);
        }
    }
    if element.hit_test(point, breakpoint) {
        return Some(HandleKind::Move);
    }
    None
}

/// In-flight drag state, captured at pointer-down.
///
/// The original layout is kept so every update derives from the drag start
/// rather than accumulating increments (which drift under snapping).
#[derive(Debug, Clone)]
pub struct DragState {
    pub element_id: ElementId,
    pub handle: HandleKind,
    /// Pointer position at drag start, in canvas space.
    pub start_point: Point,
    pub original_position: Position,
    pub original_size: Size,
    pub min_size: Size,
}

impl DragState {
    /// Capture a drag starting on `element` at `start_point`.
    pub fn begin(element: &Element, handle: HandleKind, start_point: Point, breakpoint: Breakpoint) -> Self {
        Self {
            element_id: element.id,
            handle,
            start_point,
            original_position: element.position_at(breakpoint),
            original_size: element.size_at(breakpoint),
            min_size: element.kind.min_size(),
        }
    }

    /// Pointer movement since drag start.
    pub fn delta(&self, current: Point) -> Vec2 {
        Vec2::new(current.x - self.start_point.x, current.y - self.start_point.y)
    }

    /// Layout for the current pointer position.
    ///
    /// Move drags translate; corner/edge drags resize with the opposite
    /// corner/edge pinned, normalizing an inverted rect and clamping to the
    /// element's minimum size.
    pub fn apply(&self, current: Point) -> (Position, Size) {
        let delta = self.delta(current);
        match self.handle {
            HandleKind::Move => {
                let position = Position {
                    x: self.original_position.x + delta.x,
                    y: self.original_position.y + delta.y,
                    z: self.original_position.z,
                };
                (position, self.original_size)
            }
            HandleKind::Corner(corner) => self.resize(corner_deltas(corner, delta)),
            HandleKind::Edge(edge) => self.resize(edge_deltas(edge, delta)),
        }
    }

    fn resize(&self, (d0, d1): (Vec2, Vec2)) -> (Position, Size) {
        let original = Rect::new(
            self.original_position.x,
            self.original_position.y,
            self.original_position.x + self.original_size.width,
            self.original_position.y + self.original_size.height,
        );
        let moved = Rect::new(
            original.x0 + d0.x,
            original.y0 + d0.y,
            original.x1 + d1.x,
            original.y1 + d1.y,
        );
        let normalized = Rect::new(
            moved.x0.min(moved.x1),
            moved.y0.min(moved.y1),
            moved.x0.max(moved.x1),
            moved.y0.max(moved.y1),
        );
        let size = Size::new(
            normalized.width().max(self.min_size.width),
            normalized.height().max(self.min_size.height),
        );
        let position = Position {
            x: normalized.x0,
            y: normalized.y0,
            z: self.original_position.z,
        };
        (position, size)
    }
}

/// Split a pointer delta into (top-left, bottom-right) corner movements.
fn corner_deltas(corner: Corner, delta: Vec2) -> (Vec2, Vec2) {
    match corner {
        Corner::TopLeft => (delta, Vec2::ZERO),
        Corner::TopRight => (Vec2::new(0.0, delta.y), Vec2::new(delta.x, 0.0)),
        Corner::BottomLeft => (Vec2::new(delta.x, 0.0), Vec2::new(0.0, delta.y)),
        Corner::BottomRight => (Vec2::ZERO, delta),
    }
}

fn edge_deltas(edge: Edge, delta: Vec2) -> (Vec2, Vec2) {
    match edge {
        Edge::Top => (Vec2::new(0.0, delta.y), Vec2::ZERO),
        Edge::Left => (Vec2::new(delta.x, 0.0), Vec2::ZERO),
        Edge::Bottom => (Vec2::ZERO, Vec2::new(0.0, delta.y)),
        Edge::Right => (Vec2::ZERO, Vec2::new(delta.x, 0.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    fn image() -> Element {
        let mut element = Element::from_library(ElementKind::Image, Point::new(100.0, 100.0));
        element.size = Size::new(200.0, 150.0);
        element
    }

    #[test]
    fn test_move_translates() {
        let element = image();
        let drag = DragState::begin(
            &element,
            HandleKind::Move,
            Point::new(150.0, 150.0),
            Breakpoint::Desktop,
        );
        let (position, size) = drag.apply(Point::new(180.0, 120.0));
        assert!((position.x - 130.0).abs() < f64::EPSILON);
        assert!((position.y - 70.0).abs() < f64::EPSILON);
        assert!((size.width - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_corner_resize_pins_opposite() {
        let element = image();
        let drag = DragState::begin(
            &element,
            HandleKind::Corner(Corner::BottomRight),
            Point::new(300.0, 250.0),
            Breakpoint::Desktop,
        );
        let (position, size) = drag.apply(Point::new(340.0, 280.0));
        assert!((position.x - 100.0).abs() < f64::EPSILON);
        assert!((position.y - 100.0).abs() < f64::EPSILON);
        assert!((size.width - 240.0).abs() < f64::EPSILON);
        assert!((size.height - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_edge_resize_single_axis() {
        let element = image();
        let drag = DragState::begin(
            &element,
            HandleKind::Edge(Edge::Right),
            Point::new(300.0, 175.0),
            Breakpoint::Desktop,
        );
        let (_, size) = drag.apply(Point::new(260.0, 500.0));
        assert!((size.width - 160.0).abs() < f64::EPSILON);
        assert!((size.height - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_clamps_to_min_size() {
        let element = image();
        let drag = DragState::begin(
            &element,
            HandleKind::Corner(Corner::BottomRight),
            Point::new(300.0, 250.0),
            Breakpoint::Desktop,
        );
        // Collapse the rect entirely; image floor is 100x100.
        let (_, size) = drag.apply(Point::new(100.0, 100.0));
        assert!((size.width - 100.0).abs() < f64::EPSILON);
        assert!((size.height - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inverted_drag_normalizes() {
        let element = image();
        let drag = DragState::begin(
            &element,
            HandleKind::Corner(Corner::TopLeft),
            Point::new(100.0, 100.0),
            Breakpoint::Desktop,
        );
        // Drag the top-left corner past the bottom-right one.
        let (position, _) = drag.apply(Point::new(500.0, 400.0));
        assert!((position.x - 300.0).abs() < f64::EPSILON);
        assert!((position.y - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_handles() {
        let element = image();
        let kind = hit_test_handles(&element, Point::new(101.0, 99.0), Breakpoint::Desktop);
        assert_eq!(kind, Some(HandleKind::Corner(Corner::TopLeft)));

        let body = hit_test_handles(&element, Point::new(200.0, 170.0), Breakpoint::Desktop);
        assert_eq!(body, Some(HandleKind::Move));

        let miss = hit_test_handles(&element, Point::new(500.0, 500.0), Breakpoint::Desktop);
        assert_eq!(miss, None);
    }
}
