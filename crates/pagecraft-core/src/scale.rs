//! Responsive scaler: derives one breakpoint's layout from another.

use crate::breakpoint::Breakpoint;
use crate::element::{Element, Position, Styles};
use crate::geometry;
use crate::overlap::OVERLAP_GAP;
use kurbo::Size;

/// Fixed popup width on tablet.
pub const POPUP_TABLET_WIDTH: f64 = 600.0;
/// Fixed popup width on mobile.
pub const POPUP_MOBILE_WIDTH: f64 = 340.0;

/// Widest a non-section element may be on mobile: the canvas width minus the
/// fixed edge padding.
pub const MOBILE_MAX_ELEMENT_WIDTH: f64 = 340.0;

/// Smallest scaled value for font-ish properties, in pixels.
pub const FONT_FLOOR_PX: f64 = 10.0;
/// Smallest scaled value for spacing properties, in pixels.
pub const SPACING_FLOOR_PX: f64 = 4.0;

/// Style properties the scaler is allowed to rewrite. Everything else in the
/// bag (colors, urls, shadows) passes to the overlay untouched by omission.
const SCALABLE_PROPERTIES: [&str; 13] = [
    "font-size",
    "line-height",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "border-radius",
];

/// Spacing properties kept out of the array above so the two floor classes
/// stay obvious at the call site.
const EXTRA_SPACING_PROPERTIES: [&str; 2] = ["gap", "border-width"];

/// Compute an element's size at a target breakpoint from its size at the
/// source breakpoint.
///
/// Sections always span the target canvas; popups use fixed per-breakpoint
/// widths; everything else scales proportionally, clamped up to the type's
/// minimum floor and capped at [`MOBILE_MAX_ELEMENT_WIDTH`] on mobile.
pub fn scale_size(element: &Element, from: Breakpoint, to: Breakpoint) -> Size {
    let source = element.size_at(from);
    if element.kind.is_section() {
        return Size::new(to.canvas_width(), source.height);
    }
    if element.kind.is_popup() {
        let width = match to {
            Breakpoint::Desktop => source.width,
            Breakpoint::Tablet => POPUP_TABLET_WIDTH,
            Breakpoint::Mobile => POPUP_MOBILE_WIDTH,
        };
        return Size::new(width, source.height);
    }

    let factor = Breakpoint::scale_factor(from, to);
    let min = element.kind.min_size();
    let mut width = (source.width * factor).round().max(min.width);
    let height = (source.height * factor).round().max(min.height);
    if to == Breakpoint::Mobile {
        width = width.min(MOBILE_MAX_ELEMENT_WIDTH);
    }
    Size::new(width, height)
}

/// Compute an element's position at a target breakpoint.
///
/// Sections pin to `x = 0` and keep their vertical stacking order; popups
/// pass through untouched (the renderer centers them); other elements scale
/// both axes, clamp `x` so the element stays on the canvas, and — when
/// targeting mobile with siblings in view — may get pushed below an
/// overlapping sibling.
pub fn scale_position(
    element: &Element,
    from: Breakpoint,
    to: Breakpoint,
    new_size: Size,
    siblings: &[Element],
) -> Position {
    let source = element.position_at(from);
    if element.kind.is_section() {
        return Position {
            x: 0.0,
            y: source.y,
            z: source.z,
        };
    }
    if element.kind.is_popup() {
        return source;
    }

    let factor = Breakpoint::scale_factor(from, to);
    let max_x = (to.canvas_width() - new_size.width).max(0.0);
    let x = (source.x * factor).round().min(max_x).max(0.0);
    let y = (source.y * factor).round();
    let mut position = Position { x, y, z: source.z };

    if to == Breakpoint::Mobile && !siblings.is_empty() {
        position = push_below_overlapping(element, position, new_size, siblings);
    }
    position
}

/// If the candidate placement overlaps any sibling's mobile bounds, move it
/// below the lowest such sibling with the standard gap.
fn push_below_overlapping(
    element: &Element,
    position: Position,
    size: Size,
    siblings: &[Element],
) -> Position {
    let candidate = geometry::bounds_rect(position.x, position.y, size);
    let mut lowest_bottom: Option<f64> = None;
    for sibling in siblings {
        if sibling.id == element.id || !sibling.visible {
            continue;
        }
        let bounds = sibling.bounds(Breakpoint::Mobile);
        if geometry::overlaps(candidate, bounds) {
            lowest_bottom = Some(lowest_bottom.map_or(bounds.y1, |b: f64| b.max(bounds.y1)));
        }
    }
    match lowest_bottom {
        Some(bottom) => Position {
            x: position.x,
            y: bottom + OVERLAP_GAP,
            z: position.z,
        },
        None => position,
    }
}

/// Derive the breakpoint style overlay from the desktop layer.
///
/// Only allow-listed pixel-valued properties are rewritten; each `px` token
/// scales by the breakpoint factor and is floored so text and spacing stay
/// legible. Shorthand values ("10px 20px") scale token by token. Values
/// without a `px` suffix pass through unchanged.
pub fn scale_styles(base: &Styles, from: Breakpoint, to: Breakpoint) -> Styles {
    let factor = Breakpoint::scale_factor(from, to);
    let mut overlay = Styles::new();
    for (property, value) in base.iter() {
        let floor = if SCALABLE_PROPERTIES[..2].contains(&property) {
            FONT_FLOOR_PX
        } else if SCALABLE_PROPERTIES[2..].contains(&property)
            || EXTRA_SPACING_PROPERTIES.contains(&property)
        {
            SPACING_FLOOR_PX
        } else {
            continue;
        };
        overlay.set(property, scale_length_value(value, factor, floor));
    }
    overlay
}

/// Scale each `px` token of a (possibly shorthand) length value.
fn scale_length_value(value: &str, factor: f64, floor: f64) -> String {
    value
        .split_whitespace()
        .map(|token| scale_length_token(token, factor, floor))
        .collect::<Vec<_>>()
        .join(" ")
}

fn scale_length_token(token: &str, factor: f64, floor: f64) -> String {
    let Some(number) = token.strip_suffix("px").and_then(|n| n.parse::<f64>().ok()) else {
        return token.to_string();
    };
    if number == 0.0 {
        return token.to_string();
    }
    let scaled = (number * factor).round().max(floor);
    format!("{}px", scaled as i64)
}

/// The `grid-template-columns` overlay value for a reduced column count.
pub fn column_template(columns: u32) -> String {
    format!("repeat({}, 1fr)", columns.max(1))
}
