//! Geometry primitives: bounding boxes, containment, overlap testing.

use kurbo::{Point, Rect, Size};

/// Build an axis-aligned bounding box from a top-left offset and a size.
///
/// Non-finite inputs are treated as 0 so malformed document data degrades to
/// an empty box at the origin instead of poisoning downstream math.
pub fn bounds_rect(x: f64, y: f64, size: Size) -> Rect {
    let x = finite_or_zero(x);
    let y = finite_or_zero(y);
    let w = finite_or_zero(size.width);
    let h = finite_or_zero(size.height);
    Rect::new(x, y, x + w, y + h)
}

/// Replace NaN/infinite values with 0.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Strict axis-aligned overlap test.
///
/// Boxes that merely touch along an edge do not overlap.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    !(a.x1 <= b.x0 || b.x1 <= a.x0 || a.y1 <= b.y0 || b.y1 <= a.y0)
}

/// Point containment, inclusive of the box edges.
pub fn contains(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Horizontal center of a box.
pub fn center_x(rect: Rect) -> f64 {
    (rect.x0 + rect.x1) / 2.0
}

/// Vertical center of a box.
pub fn center_y(rect: Rect) -> f64 {
    (rect.y0 + rect.y1) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_rect() {
        let rect = bounds_rect(10.0, 20.0, Size::new(100.0, 50.0));
        assert!((rect.x0 - 10.0).abs() < f64::EPSILON);
        assert!((rect.y0 - 20.0).abs() < f64::EPSILON);
        assert!((rect.x1 - 110.0).abs() < f64::EPSILON);
        assert!((rect.y1 - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_rect_malformed_input() {
        let rect = bounds_rect(f64::NAN, f64::INFINITY, Size::new(100.0, f64::NAN));
        assert!((rect.x0).abs() < f64::EPSILON);
        assert!((rect.y0).abs() < f64::EPSILON);
        assert!((rect.x1 - 100.0).abs() < f64::EPSILON);
        assert!((rect.y1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 150.0, 150.0);
        assert!(overlaps(a, b));
        assert!(overlaps(b, a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 0.0, 200.0, 100.0);
        assert!(!overlaps(a, b));

        let below = Rect::new(0.0, 100.0, 100.0, 200.0);
        assert!(!overlaps(a, below));
    }

    #[test]
    fn test_disjoint_boxes() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(500.0, 500.0, 510.0, 510.0);
        assert!(!overlaps(a, b));
    }

    #[test]
    fn test_contains() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(contains(rect, Point::new(50.0, 50.0)));
        assert!(contains(rect, Point::new(0.0, 0.0)));
        assert!(contains(rect, Point::new(100.0, 100.0)));
        assert!(!contains(rect, Point::new(100.1, 50.0)));
    }

    #[test]
    fn test_centers() {
        let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
        assert!((center_x(rect) - 60.0).abs() < f64::EPSILON);
        assert!((center_y(rect) - 45.0).abs() < f64::EPSILON);
    }
}
