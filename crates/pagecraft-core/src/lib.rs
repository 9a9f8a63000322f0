//! Pagecraft Core Library
//!
//! Platform-agnostic responsive geometry engine for the Pagecraft landing
//! page builder: breakpoint synchronization, coordinate transforms,
//! snapping, and overlap resolution over an element tree. Rendering,
//! networking, and persistence policy live in the surrounding application;
//! this crate only defines the document shape and the layout math.

pub mod breakpoint;
pub mod command;
pub mod drag;
pub mod element;
pub mod events;
pub mod geometry;
pub mod overlap;
pub mod page;
pub mod scale;
pub mod snap;
pub mod storage;
pub mod sync;
pub mod viewport;

pub use breakpoint::{Breakpoint, DESKTOP_WIDTH, MOBILE_WIDTH, TABLET_WIDTH};
pub use command::{EditorCommand, EditorSession};
pub use drag::{Corner, DragState, Edge, Handle, HandleKind};
pub use element::{
    ComponentData, Element, ElementId, ElementKind, Position, ResponsivePosition,
    ResponsiveStyles, Styles,
};
pub use events::{EditorEvent, EventBus, Subscription, Topic};
pub use overlap::{count_overlaps, resolve_overlaps};
pub use page::{CanvasSettings, PageData, PageMeta};
pub use snap::{SNAP_TOLERANCE, SnapResult, SnapTarget, SnapTargetKind, snap_point, snap_to_grid};
pub use storage::{MemoryStorage, Storage, StorageError, StorageResult};
pub use sync::{initialize_if_missing, sync_all, sync_element};
pub use viewport::{Viewport, to_canvas_space};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
