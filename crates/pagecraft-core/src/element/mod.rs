//! Element tree: the central document entity.

mod component_data;
mod kind;
mod style;

pub use component_data::{ComponentData, TABLET_MAX_COLUMNS};
pub use kind::ElementKind;
pub use style::{ResponsiveStyles, Styles};

use crate::breakpoint::Breakpoint;
use crate::geometry;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// A pixel offset relative to the parent's content origin, plus stacking
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// Stacking order; higher paints on top.
    #[serde(default)]
    pub z: i32,
}

impl Position {
    /// Create a position at the given offsets with default stacking.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0 }
    }

    /// The offset as a point, with non-finite components defaulted to 0.
    pub fn point(&self) -> Point {
        Point::new(
            geometry::finite_or_zero(self.x),
            geometry::finite_or_zero(self.y),
        )
    }
}

/// One [`Position`] per breakpoint.
///
/// The desktop position always exists; tablet and mobile start out unset and
/// are filled in by responsive sync. Reads fall back to the desktop position
/// until then.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponsivePosition {
    #[serde(default)]
    pub desktop: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<Position>,
}

impl ResponsivePosition {
    /// Create with only the desktop position set.
    pub fn desktop_only(position: Position) -> Self {
        Self {
            desktop: position,
            tablet: None,
            mobile: None,
        }
    }

    /// Position at a breakpoint, falling back to desktop when unset.
    pub fn get(&self, breakpoint: Breakpoint) -> Position {
        match breakpoint {
            Breakpoint::Desktop => self.desktop,
            Breakpoint::Tablet => self.tablet.unwrap_or(self.desktop),
            Breakpoint::Mobile => self.mobile.unwrap_or(self.desktop),
        }
    }

    /// Set the position for a breakpoint.
    pub fn set(&mut self, breakpoint: Breakpoint, position: Position) {
        match breakpoint {
            Breakpoint::Desktop => self.desktop = position,
            Breakpoint::Tablet => self.tablet = Some(position),
            Breakpoint::Mobile => self.mobile = Some(position),
        }
    }

    /// Whether a breakpoint-specific position is stored (desktop always is).
    pub fn is_set(&self, breakpoint: Breakpoint) -> bool {
        match breakpoint {
            Breakpoint::Desktop => true,
            Breakpoint::Tablet => self.tablet.is_some(),
            Breakpoint::Mobile => self.mobile.is_some(),
        }
    }
}

fn default_visible() -> bool {
    true
}

/// An element on the canvas: a positioned, sized, styled node in the page
/// tree.
///
/// Each element carries three parallel layout representations, one per
/// breakpoint: a per-breakpoint position, the base (desktop) size plus
/// optional tablet/mobile overrides, and the base style bag plus
/// tablet/mobile overlays. Children are exclusively owned; the tree is
/// strictly hierarchical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default)]
    pub component_data: ComponentData,
    pub position: ResponsivePosition,
    /// Base size; implicitly the desktop size.
    pub size: Size,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet_size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_size: Option<Size>,
    /// Base styles; the desktop layer of the cascade.
    #[serde(default, skip_serializing_if = "Styles::is_empty")]
    pub styles: Styles,
    #[serde(default)]
    pub responsive_styles: ResponsiveStyles,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
}

impl Element {
    /// Create a bare element of a kind at the desktop origin with the kind's
    /// default size.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            component_data: ComponentData::new(),
            position: ResponsivePosition::default(),
            size: kind.default_size(),
            tablet_size: None,
            mobile_size: None,
            styles: Styles::new(),
            responsive_styles: ResponsiveStyles::default(),
            children: Vec::new(),
            visible: true,
            locked: false,
        }
    }

    /// Create an element the way the component library drops one: default
    /// size, library default styles, positioned at `at` on the desktop
    /// canvas.
    pub fn from_library(kind: ElementKind, at: Point) -> Self {
        let mut element = Self::new(kind);
        element.position = ResponsivePosition::desktop_only(Position::new(at.x, at.y));
        element.styles = library_styles(kind);
        element.component_data = library_component_data(kind);
        element
    }

    /// Size at a breakpoint, falling back to the base size when no override
    /// is stored.
    pub fn size_at(&self, breakpoint: Breakpoint) -> Size {
        let size = match breakpoint {
            Breakpoint::Desktop => self.size,
            Breakpoint::Tablet => self.tablet_size.unwrap_or(self.size),
            Breakpoint::Mobile => self.mobile_size.unwrap_or(self.size),
        };
        Size::new(
            geometry::finite_or_zero(size.width),
            geometry::finite_or_zero(size.height),
        )
    }

    /// Store the size for a breakpoint.
    pub fn set_size_at(&mut self, breakpoint: Breakpoint, size: Size) {
        match breakpoint {
            Breakpoint::Desktop => self.size = size,
            Breakpoint::Tablet => self.tablet_size = Some(size),
            Breakpoint::Mobile => self.mobile_size = Some(size),
        }
    }

    /// Position at a breakpoint, falling back to desktop when unset.
    pub fn position_at(&self, breakpoint: Breakpoint) -> Position {
        self.position.get(breakpoint)
    }

    /// Store the position for a breakpoint.
    pub fn set_position_at(&mut self, breakpoint: Breakpoint, position: Position) {
        self.position.set(breakpoint, position);
    }

    /// Bounding box at a breakpoint, in the parent's coordinate space.
    pub fn bounds(&self, breakpoint: Breakpoint) -> Rect {
        let position = self.position_at(breakpoint);
        geometry::bounds_rect(position.x, position.y, self.size_at(breakpoint))
    }

    /// Effective styles at a breakpoint, after the cascade.
    pub fn resolved_styles(&self, breakpoint: Breakpoint) -> Styles {
        self.responsive_styles.resolve(&self.styles, breakpoint)
    }

    /// Whether a point (in the parent's coordinate space) hits this element
    /// at a breakpoint. Invisible elements are never hit.
    pub fn hit_test(&self, point: Point, breakpoint: Breakpoint) -> bool {
        self.visible && geometry::contains(self.bounds(breakpoint), point)
    }

    /// Whether this element (or any descendant) still lacks a tablet or
    /// mobile position.
    pub fn needs_responsive_init(&self) -> bool {
        !self.position.is_set(Breakpoint::Tablet)
            || !self.position.is_set(Breakpoint::Mobile)
            || self.children.iter().any(Element::needs_responsive_init)
    }

    /// Assign fresh ids to this element and every descendant.
    ///
    /// Used when duplicating or pasting so the copy never shares ids with
    /// the original.
    pub fn regenerate_ids(&mut self) {
        self.id = Uuid::new_v4();
        for child in &mut self.children {
            child.regenerate_ids();
        }
    }

    /// Find a descendant (or self) by id.
    pub fn find(&self, id: ElementId) -> Option<&Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Find a descendant (or self) by id, mutably.
    pub fn find_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }
}

/// Library default styles per kind.
fn library_styles(kind: ElementKind) -> Styles {
    let mut styles = Styles::new();
    match kind {
        ElementKind::Section => {
            styles.set("padding", "40px 24px");
            styles.set("background-color", "#ffffff");
        }
        ElementKind::Popup => {
            styles.set("padding", "24px");
            styles.set("border-radius", "12px");
            styles.set("background-color", "#ffffff");
        }
        ElementKind::Heading => {
            styles.set("font-size", "32px");
            styles.set("line-height", "40px");
            styles.set("color", "#111111");
        }
        ElementKind::Paragraph => {
            styles.set("font-size", "16px");
            styles.set("line-height", "24px");
            styles.set("color", "#333333");
        }
        ElementKind::Button => {
            styles.set("font-size", "16px");
            styles.set("padding", "12px 24px");
            styles.set("border-radius", "6px");
            styles.set("background-color", "#2563eb");
            styles.set("color", "#ffffff");
        }
        ElementKind::Image | ElementKind::Video => {
            styles.set("border-radius", "4px");
        }
        ElementKind::Icon => {}
        ElementKind::Gallery => {
            styles.set("gap", "16px");
        }
        ElementKind::Form => {
            styles.set("gap", "12px");
            styles.set("padding", "16px");
        }
        ElementKind::Container => {
            styles.set("padding", "16px");
        }
        ElementKind::Divider => {
            styles.set("background-color", "#e5e7eb");
        }
    }
    styles
}

/// Library default component payload per kind.
fn library_component_data(kind: ElementKind) -> ComponentData {
    let mut data = ComponentData::new();
    match kind {
        ElementKind::Gallery => data.columns = Some(3),
        ElementKind::Form => data.columns = Some(2),
        _ => {}
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_fallback_to_desktop() {
        let position = ResponsivePosition::desktop_only(Position::new(100.0, 200.0));
        let mobile = position.get(Breakpoint::Mobile);
        assert!((mobile.x - 100.0).abs() < f64::EPSILON);
        assert!((mobile.y - 200.0).abs() < f64::EPSILON);
        assert!(!position.is_set(Breakpoint::Mobile));
    }

    #[test]
    fn test_size_fallback_and_override() {
        let mut element = Element::new(ElementKind::Button);
        element.size = Size::new(200.0, 50.0);
        let fallback = element.size_at(Breakpoint::Mobile);
        assert!((fallback.width - 200.0).abs() < f64::EPSILON);

        element.set_size_at(Breakpoint::Mobile, Size::new(80.0, 32.0));
        let overridden = element.size_at(Breakpoint::Mobile);
        assert!((overridden.width - 80.0).abs() < f64::EPSILON);
        // The base size is untouched.
        assert!((element.size.width - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_uses_breakpoint_layout() {
        let mut element = Element::new(ElementKind::Image);
        element.size = Size::new(300.0, 200.0);
        element.position = ResponsivePosition::desktop_only(Position::new(50.0, 60.0));
        element.set_position_at(Breakpoint::Mobile, Position::new(10.0, 20.0));
        element.set_size_at(Breakpoint::Mobile, Size::new(100.0, 100.0));

        let desktop = element.bounds(Breakpoint::Desktop);
        assert!((desktop.x1 - 350.0).abs() < f64::EPSILON);

        let mobile = element.bounds(Breakpoint::Mobile);
        assert!((mobile.x0 - 10.0).abs() < f64::EPSILON);
        assert!((mobile.x1 - 110.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_respects_visibility() {
        let mut element = Element::new(ElementKind::Button);
        element.size = Size::new(100.0, 40.0);
        assert!(element.hit_test(Point::new(50.0, 20.0), Breakpoint::Desktop));
        element.visible = false;
        assert!(!element.hit_test(Point::new(50.0, 20.0), Breakpoint::Desktop));
    }

    #[test]
    fn test_regenerate_ids_recursive() {
        let mut parent = Element::new(ElementKind::Section);
        parent.children.push(Element::new(ElementKind::Button));
        let old_parent = parent.id;
        let old_child = parent.children[0].id;

        parent.regenerate_ids();
        assert_ne!(parent.id, old_parent);
        assert_ne!(parent.children[0].id, old_child);
    }

    #[test]
    fn test_find_recursive() {
        let mut section = Element::new(ElementKind::Section);
        let button = Element::new(ElementKind::Button);
        let button_id = button.id;
        section.children.push(button);

        assert!(section.find(button_id).is_some());
        assert!(section.find(Uuid::new_v4()).is_none());

        let found = section.find_mut(button_id).unwrap();
        found.locked = true;
        assert!(section.children[0].locked);
    }

    #[test]
    fn test_needs_responsive_init() {
        let mut element = Element::new(ElementKind::Heading);
        assert!(element.needs_responsive_init());
        element.set_position_at(Breakpoint::Tablet, Position::new(0.0, 0.0));
        element.set_position_at(Breakpoint::Mobile, Position::new(0.0, 0.0));
        assert!(!element.needs_responsive_init());

        // A child without responsive data marks the whole subtree.
        element.children.push(Element::new(ElementKind::Icon));
        assert!(element.needs_responsive_init());
    }

    #[test]
    fn test_serde_type_tag() {
        let element = Element::new(ElementKind::Heading);
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "heading");
    }
}
