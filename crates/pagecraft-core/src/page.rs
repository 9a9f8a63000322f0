//! Page document: the root aggregate owned by an editing session.

use crate::breakpoint::{Breakpoint, DESKTOP_WIDTH};
use crate::element::{Element, ElementId};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Canvas settings for a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    /// Authoring width; matches the desktop breakpoint.
    pub width: f64,
    /// Working canvas height. Grows as content is added; not a clamp.
    pub height: f64,
    /// Canvas background (color or image reference, owned by the renderer).
    pub background: String,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: DESKTOP_WIDTH,
            height: 2000.0,
            background: "#ffffff".to_string(),
        }
    }
}

/// Document timestamps, set by the surrounding application.
///
/// The core never reads a clock; callers stamp these when persisting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// A page document: canvas settings plus the element tree.
///
/// Exclusively owned by a single editing session. Mutating operations either
/// borrow `&mut self` or return a fresh tree (responsive sync); there is no
/// shared-state concurrency to manage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub meta: PageMeta,
}

impl PageData {
    /// Create an empty page with default canvas settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level element, placing it above everything else.
    pub fn add_element(&mut self, mut element: Element) -> ElementId {
        let top = self
            .elements
            .iter()
            .map(|el| el.position.desktop.z)
            .max()
            .unwrap_or(0);
        element.position.desktop.z = top + 1;
        let id = element.id;
        self.elements.push(element);
        id
    }

    /// Add a child under `parent`, or at top level when `parent` is `None`.
    ///
    /// Returns the new element's id, or `None` when the parent id does not
    /// resolve (the element is dropped, logged, never inserted elsewhere).
    pub fn insert_element(&mut self, parent: Option<ElementId>, element: Element) -> Option<ElementId> {
        match parent {
            None => Some(self.add_element(element)),
            Some(parent_id) => match self.find_element_mut(parent_id) {
                Some(parent) => {
                    let id = element.id;
                    parent.children.push(element);
                    Some(id)
                }
                None => {
                    log::warn!("insert_element: unknown parent {parent_id}");
                    None
                }
            },
        }
    }

    /// Remove an element (top-level or nested) by id.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        if let Some(index) = self.elements.iter().position(|el| el.id == id) {
            return Some(self.elements.remove(index));
        }
        for element in &mut self.elements {
            if let Some(removed) = remove_from_children(element, id) {
                return Some(removed);
            }
        }
        None
    }

    /// Find an element anywhere in the tree.
    pub fn find_element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find_map(|el| el.find(id))
    }

    /// Find an element anywhere in the tree, mutably.
    pub fn find_element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find_map(|el| el.find_mut(id))
    }

    /// Top-level elements under a point at a breakpoint, front to back.
    pub fn elements_at_point(&self, point: Point, breakpoint: Breakpoint) -> Vec<ElementId> {
        let mut hits: Vec<(i32, ElementId)> = self
            .elements
            .iter()
            .filter(|el| el.hit_test(point, breakpoint))
            .map(|el| (el.position_at(breakpoint).z, el.id))
            .collect();
        hits.sort_by_key(|(z, _)| std::cmp::Reverse(*z));
        hits.into_iter().map(|(_, id)| id).collect()
    }

    /// Union bounding box of all visible top-level elements at a breakpoint.
    pub fn bounds(&self, breakpoint: Breakpoint) -> Option<Rect> {
        let mut result: Option<Rect> = None;
        for element in self.elements.iter().filter(|el| el.visible) {
            let bounds = element.bounds(breakpoint);
            result = Some(match result {
                Some(acc) => acc.union(bounds),
                None => bounds,
            });
        }
        result
    }

    /// Raise an element above all its top-level siblings at a breakpoint.
    pub fn bring_to_front(&mut self, id: ElementId, breakpoint: Breakpoint) {
        let Some(top) = self.max_z(breakpoint) else {
            return;
        };
        if let Some(element) = self.elements.iter_mut().find(|el| el.id == id) {
            let mut position = element.position_at(breakpoint);
            position.z = top + 1;
            element.set_position_at(breakpoint, position);
        }
    }

    /// Lower an element below all its top-level siblings at a breakpoint.
    pub fn send_to_back(&mut self, id: ElementId, breakpoint: Breakpoint) {
        let Some(bottom) = self.min_z(breakpoint) else {
            return;
        };
        if let Some(element) = self.elements.iter_mut().find(|el| el.id == id) {
            let mut position = element.position_at(breakpoint);
            position.z = bottom - 1;
            element.set_position_at(breakpoint, position);
        }
    }

    fn max_z(&self, breakpoint: Breakpoint) -> Option<i32> {
        self.elements
            .iter()
            .map(|el| el.position_at(breakpoint).z)
            .max()
    }

    fn min_z(&self, breakpoint: Breakpoint) -> Option<i32> {
        self.elements
            .iter()
            .map(|el| el.position_at(breakpoint).z)
            .min()
    }

    /// Serialize to pretty JSON (the persisted representation).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

fn remove_from_children(parent: &mut Element, id: ElementId) -> Option<Element> {
    if let Some(index) = parent.children.iter().position(|child| child.id == id) {
        return Some(parent.children.remove(index));
    }
    for child in &mut parent.children {
        if let Some(removed) = remove_from_children(child, id) {
            return Some(removed);
        }
    }
    None
}
