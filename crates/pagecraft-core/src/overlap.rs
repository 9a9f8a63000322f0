//! Overlap detection and resolution among sibling elements.

use crate::breakpoint::Breakpoint;
use crate::element::Element;
use crate::geometry;

/// Vertical gap inserted between elements when resolving an overlap.
pub const OVERLAP_GAP: f64 = 10.0;

/// Left margin used by the stacking fallback.
pub const STACK_LEFT_MARGIN: f64 = 10.0;

/// Count the overlapping unordered pairs among siblings at a breakpoint.
pub fn count_overlaps(elements: &[Element], breakpoint: Breakpoint) -> usize {
    let mut count = 0;
    for i in 0..elements.len() {
        for j in (i + 1)..elements.len() {
            if geometry::overlaps(elements[i].bounds(breakpoint), elements[j].bounds(breakpoint)) {
                count += 1;
            }
        }
    }
    count
}

/// Resolve overlaps among siblings at a breakpoint by displacing later
/// elements downward.
///
/// Single forward pass over unordered index pairs `(i, j)`, `i < j`: when
/// the pair overlaps, `j` moves below `i` with [`OVERLAP_GAP`]. When the
/// push is larger than the element's original vertical offset the element is
/// also pulled to [`STACK_LEFT_MARGIN`], degrading into a simple vertical
/// stack. One pass is a heuristic: a push can reintroduce an overlap with an
/// earlier pair, so the output is "no worse", not guaranteed overlap-free.
///
/// Returns a new vector; the input slice is untouched.
pub fn resolve_overlaps(elements: &[Element], breakpoint: Breakpoint) -> Vec<Element> {
    let mut resolved = elements.to_vec();
    for i in 0..resolved.len() {
        for j in (i + 1)..resolved.len() {
            let upper = resolved[i].bounds(breakpoint);
            let lower = resolved[j].bounds(breakpoint);
            if !geometry::overlaps(upper, lower) {
                continue;
            }

            let mut position = resolved[j].position_at(breakpoint);
            let pushed_to = upper.y1 + OVERLAP_GAP;
            let push_distance = pushed_to - position.y;
            if push_distance > position.y.max(0.0) {
                position.x = STACK_LEFT_MARGIN;
            }
            position.y = pushed_to;
            resolved[j].set_position_at(breakpoint, position);
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementKind, Position};
    use kurbo::{Point, Size};

    fn image_at(x: f64, y: f64, width: f64, height: f64) -> Element {
        let mut element = Element::from_library(ElementKind::Image, Point::new(x, y));
        element.size = Size::new(width, height);
        element.set_position_at(Breakpoint::Mobile, Position::new(x, y));
        element.set_size_at(Breakpoint::Mobile, Size::new(width, height));
        element
    }

    #[test]
    fn test_two_overlapping_elements_separate() {
        let elements = vec![
            image_at(0.0, 100.0, 200.0, 120.0),
            image_at(50.0, 120.0, 200.0, 150.0),
        ];
        assert_eq!(count_overlaps(&elements, Breakpoint::Mobile), 1);

        let resolved = resolve_overlaps(&elements, Breakpoint::Mobile);
        assert_eq!(count_overlaps(&resolved, Breakpoint::Mobile), 0);

        let moved = resolved[1].position_at(Breakpoint::Mobile);
        // Below the first element's bottom edge (220) plus the gap.
        assert!((moved.y - 230.0).abs() < f64::EPSILON);
        // Small push keeps the horizontal offset.
        assert!((moved.x - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_large_push_triggers_stacking_fallback() {
        let elements = vec![
            image_at(0.0, 0.0, 300.0, 400.0),
            image_at(150.0, 20.0, 120.0, 100.0),
        ];
        let resolved = resolve_overlaps(&elements, Breakpoint::Mobile);
        let moved = resolved[1].position_at(Breakpoint::Mobile);
        // Pushed from y=20 to 410: far past the original offset, so the
        // element resets to the stack margin.
        assert!((moved.y - 410.0).abs() < f64::EPSILON);
        assert!((moved.x - STACK_LEFT_MARGIN).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_overlapping_untouched() {
        let elements = vec![
            image_at(0.0, 0.0, 100.0, 100.0),
            image_at(0.0, 200.0, 100.0, 100.0),
        ];
        let resolved = resolve_overlaps(&elements, Breakpoint::Mobile);
        for (before, after) in elements.iter().zip(&resolved) {
            assert_eq!(before.position_at(Breakpoint::Mobile), after.position_at(Breakpoint::Mobile));
        }
    }

    #[test]
    fn test_single_pass_no_worse() {
        let elements = vec![
            image_at(0.0, 0.0, 200.0, 200.0),
            image_at(20.0, 30.0, 200.0, 200.0),
            image_at(40.0, 60.0, 200.0, 200.0),
        ];
        let before = count_overlaps(&elements, Breakpoint::Mobile);
        let resolved = resolve_overlaps(&elements, Breakpoint::Mobile);
        let after = count_overlaps(&resolved, Breakpoint::Mobile);
        assert!(after <= before);
    }

    #[test]
    fn test_input_not_mutated() {
        let elements = vec![
            image_at(0.0, 100.0, 200.0, 150.0),
            image_at(50.0, 120.0, 200.0, 150.0),
        ];
        let _ = resolve_overlaps(&elements, Breakpoint::Mobile);
        let second = elements[1].position_at(Breakpoint::Mobile);
        assert!((second.y - 120.0).abs() < f64::EPSILON);
    }
}
