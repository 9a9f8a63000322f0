//! Editor intents and the session that applies them.
//!
//! The UI never mutates the page tree directly: it emits [`EditorCommand`]
//! values and the [`EditorSession`] applies them — transforming pointer
//! coordinates, snapping, syncing breakpoints — then publishes the outcome
//! on its event bus. Every mutation replaces the whole tree, so the page the
//! session hands out is always internally consistent.

use crate::breakpoint::Breakpoint;
use crate::drag::{DragState, HandleKind, hit_test_handles};
use crate::element::{Element, ElementId, ElementKind, Position};
use crate::events::{EditorEvent, EventBus};
use crate::page::PageData;
use crate::snap::{self, DEFAULT_GRID_SIZE};
use crate::sync;
use crate::viewport::Viewport;
use kurbo::{Point, Size};

/// Offset applied to duplicated elements so the copy is visible.
const DUPLICATE_OFFSET: f64 = 10.0;

/// An intent emitted by the UI layer.
#[derive(Debug, Clone)]
pub enum EditorCommand {
    /// Drop a library component at a pointer position (screen space).
    InsertElement {
        parent: Option<ElementId>,
        kind: ElementKind,
        pointer: Point,
    },
    /// Clone an element (with fresh ids) next to the original.
    DuplicateElement { id: ElementId },
    RemoveElement { id: ElementId },
    /// Start dragging whatever is under the pointer position (screen space).
    BeginDrag { id: ElementId, pointer: Point },
    /// Continue the active drag.
    UpdateDrag { pointer: Point },
    /// Commit the active drag and re-derive the other breakpoints.
    EndDrag,
    /// Write a style property into the active breakpoint's layer.
    SetStyle {
        id: ElementId,
        property: String,
        value: String,
    },
    /// Make another breakpoint active, syncing away from the one edited so
    /// far.
    SwitchBreakpoint { to: Breakpoint },
    OpenPopup { id: ElementId },
    ClosePopup { id: ElementId },
    /// Backfill responsive layouts on documents that predate them.
    InitializeResponsive,
}

/// A single-user editing session: the page tree plus the interaction state
/// needed to apply commands against it.
pub struct EditorSession {
    page: PageData,
    breakpoint: Breakpoint,
    pub viewport: Viewport,
    pub grid_size: f64,
    pub snap_enabled: bool,
    pub events: EventBus,
    drag: Option<DragState>,
}

impl EditorSession {
    /// Open a session on a page, editing the desktop breakpoint.
    pub fn new(page: PageData) -> Self {
        Self {
            page,
            breakpoint: Breakpoint::Desktop,
            viewport: Viewport::new(),
            grid_size: DEFAULT_GRID_SIZE,
            snap_enabled: true,
            events: EventBus::new(),
            drag: None,
        }
    }

    /// The authoritative page tree.
    pub fn page(&self) -> &PageData {
        &self.page
    }

    /// The breakpoint currently being edited.
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Apply one command. Returns the id of a newly created element for
    /// insert/duplicate, `None` otherwise.
    pub fn dispatch(&mut self, command: EditorCommand) -> Option<ElementId> {
        match command {
            EditorCommand::InsertElement { parent, kind, pointer } => {
                self.insert_element(parent, kind, pointer)
            }
            EditorCommand::DuplicateElement { id } => self.duplicate_element(id),
            EditorCommand::RemoveElement { id } => {
                if self.page.remove_element(id).is_some() {
                    self.events.publish(&EditorEvent::DocumentReplaced);
                }
                None
            }
            EditorCommand::BeginDrag { id, pointer } => {
                self.begin_drag(id, pointer);
                None
            }
            EditorCommand::UpdateDrag { pointer } => {
                self.update_drag(pointer);
                None
            }
            EditorCommand::EndDrag => {
                self.end_drag();
                None
            }
            EditorCommand::SetStyle { id, property, value } => {
                self.set_style(id, &property, &value);
                None
            }
            EditorCommand::SwitchBreakpoint { to } => {
                self.switch_breakpoint(to);
                None
            }
            EditorCommand::OpenPopup { id } => {
                self.set_popup_visible(id, true);
                None
            }
            EditorCommand::ClosePopup { id } => {
                self.set_popup_visible(id, false);
                None
            }
            EditorCommand::InitializeResponsive => {
                self.page = sync::initialize_if_missing(&self.page);
                self.events.publish(&EditorEvent::DocumentReplaced);
                None
            }
        }
    }

    fn insert_element(
        &mut self,
        parent: Option<ElementId>,
        kind: ElementKind,
        pointer: Point,
    ) -> Option<ElementId> {
        let canvas_point = self.viewport.to_canvas(pointer);
        let dropped_at = self.snapped_canvas_point(canvas_point, None);
        let mut element = Element::from_library(kind, dropped_at);
        if self.breakpoint != Breakpoint::Desktop {
            // Library drops land on the breakpoint being edited; that layout
            // becomes the source the others are derived from.
            element.set_position_at(self.breakpoint, Position::new(dropped_at.x, dropped_at.y));
        }
        let synced = sync::sync_element(&element, self.breakpoint);
        let id = self.page.insert_element(parent, synced)?;
        self.events.publish(&EditorEvent::DocumentReplaced);
        Some(id)
    }

    fn duplicate_element(&mut self, id: ElementId) -> Option<ElementId> {
        let mut copy = self.page.find_element(id)?.clone();
        copy.regenerate_ids();
        for bp in Breakpoint::ALL {
            if copy.position.is_set(bp) {
                let mut position = copy.position_at(bp);
                position.x += DUPLICATE_OFFSET;
                position.y += DUPLICATE_OFFSET;
                copy.set_position_at(bp, position);
            }
        }
        let new_id = self.page.add_element(copy);
        self.events.publish(&EditorEvent::DocumentReplaced);
        Some(new_id)
    }

    fn begin_drag(&mut self, id: ElementId, pointer: Point) {
        let canvas_point = self.viewport.to_canvas(pointer);
        let Some(element) = self.page.find_element(id) else {
            log::warn!("begin_drag: unknown element {id}");
            return;
        };
        if element.locked {
            log::debug!("begin_drag: element {id} is locked");
            return;
        }
        let handle = hit_test_handles(element, canvas_point, self.breakpoint)
            .unwrap_or(HandleKind::Move);
        self.drag = Some(DragState::begin(element, handle, canvas_point, self.breakpoint));
    }

    fn update_drag(&mut self, pointer: Point) {
        let Some(drag) = self.drag.clone() else {
            return;
        };
        let canvas_point = self.viewport.to_canvas(pointer);
        let (mut position, size) = drag.apply(canvas_point);

        if drag.handle == HandleKind::Move {
            let snapped = self.snapped_canvas_point(
                Point::new(position.x, position.y),
                Some(drag.element_id),
            );
            position.x = snapped.x;
            position.y = snapped.y;
        }

        let breakpoint = self.breakpoint;
        if let Some(element) = self.page.find_element_mut(drag.element_id) {
            element.set_position_at(breakpoint, position);
            element.set_size_at(breakpoint, size);
        }
    }

    fn end_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        if let Some(element) = self.page.find_element(drag.element_id) {
            let synced = sync::sync_element(element, self.breakpoint);
            if let Some(slot) = self.page.find_element_mut(drag.element_id) {
                *slot = synced;
            }
            self.events.publish(&EditorEvent::ElementSynced { id: drag.element_id });
            self.events.publish(&EditorEvent::DocumentReplaced);
        }
    }

    fn set_style(&mut self, id: ElementId, property: &str, value: &str) {
        let breakpoint = self.breakpoint;
        let Some(element) = self.page.find_element_mut(id) else {
            log::warn!("set_style: unknown element {id}");
            return;
        };
        match breakpoint {
            Breakpoint::Desktop => element.styles.set(property, value),
            Breakpoint::Tablet => element.responsive_styles.tablet.set(property, value),
            Breakpoint::Mobile => element.responsive_styles.mobile.set(property, value),
        }
        self.events.publish(&EditorEvent::DocumentReplaced);
    }

    fn switch_breakpoint(&mut self, to: Breakpoint) {
        if to == self.breakpoint {
            return;
        }
        let from = self.breakpoint;
        // The breakpoint being left was the one edited; it is authoritative
        // for the other two until the user edits elsewhere.
        self.page = sync::sync_all(&self.page, from);
        self.breakpoint = to;
        self.drag = None;
        self.events.publish(&EditorEvent::BreakpointChanged { from, to });
        self.events.publish(&EditorEvent::DocumentReplaced);
    }

    fn set_popup_visible(&mut self, id: ElementId, visible: bool) {
        let Some(element) = self.page.find_element_mut(id) else {
            log::warn!("popup toggle: unknown element {id}");
            return;
        };
        if !element.kind.is_popup() {
            log::debug!("popup toggle on non-popup element {id}");
            return;
        }
        element.visible = visible;
        let event = if visible {
            EditorEvent::PopupOpened { id }
        } else {
            EditorEvent::PopupClosed { id }
        };
        self.events.publish(&event);
    }

    /// Pointer/canvas-space point run through the full placement pipeline:
    /// viewport transform, then grid/guide snapping against the visible
    /// siblings.
    fn snapped_canvas_point(&self, point: Point, exclude: Option<ElementId>) -> Point {
        let canvas = Size::new(self.breakpoint.canvas_width(), self.page.canvas.height);
        let targets =
            snap::collect_snap_targets(canvas, &self.page.elements, self.breakpoint, exclude);
        snap::snap_point(point, self.grid_size, &targets, self.snap_enabled).point
    }
}
