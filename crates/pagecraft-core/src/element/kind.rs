//! Element type vocabulary and per-type sizing rules.

use kurbo::Size;
use serde::{Deserialize, Serialize};

/// The closed vocabulary of element types the library can drop onto the
/// canvas.
///
/// The type determines which sizing and positioning rules responsive
/// scaling applies: sections are full-bleed, popups use fixed per-breakpoint
/// widths, everything else scales proportionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Full-bleed top-level band; always spans the canvas width.
    Section,
    /// Overlay dialog; centered by the rendering layer.
    #[serde(alias = "modal")]
    Popup,
    Heading,
    Paragraph,
    Button,
    Image,
    Icon,
    Gallery,
    Form,
    /// Free-form nesting container for advanced layouts.
    Container,
    Video,
    Divider,
}

impl ElementKind {
    /// Whether this is the full-bleed section type.
    pub fn is_section(self) -> bool {
        matches!(self, ElementKind::Section)
    }

    /// Whether this is the popup/modal overlay type.
    pub fn is_popup(self) -> bool {
        matches!(self, ElementKind::Popup)
    }

    /// Whether this type scales proportionally with the canvas width.
    ///
    /// Sections and popups have their own width rules and never do.
    pub fn scales_proportionally(self) -> bool {
        !self.is_section() && !self.is_popup()
    }

    /// Minimum size floor for this type.
    ///
    /// Scaled sizes are clamped up to this floor so elements stay usable at
    /// the narrowest breakpoint.
    pub fn min_size(self) -> Size {
        match self {
            ElementKind::Section => Size::new(320.0, 60.0),
            ElementKind::Popup => Size::new(280.0, 150.0),
            ElementKind::Heading => Size::new(80.0, 24.0),
            ElementKind::Paragraph => Size::new(120.0, 40.0),
            ElementKind::Button => Size::new(80.0, 32.0),
            ElementKind::Image => Size::new(100.0, 100.0),
            ElementKind::Icon => Size::new(24.0, 24.0),
            ElementKind::Gallery => Size::new(200.0, 150.0),
            ElementKind::Form => Size::new(220.0, 180.0),
            ElementKind::Container => Size::new(100.0, 60.0),
            ElementKind::Video => Size::new(160.0, 90.0),
            ElementKind::Divider => Size::new(80.0, 4.0),
        }
    }

    /// Default size used when this type is dropped from the library onto the
    /// desktop canvas.
    pub fn default_size(self) -> Size {
        match self {
            ElementKind::Section => Size::new(1200.0, 400.0),
            ElementKind::Popup => Size::new(600.0, 400.0),
            ElementKind::Heading => Size::new(300.0, 48.0),
            ElementKind::Paragraph => Size::new(400.0, 120.0),
            ElementKind::Button => Size::new(160.0, 48.0),
            ElementKind::Image => Size::new(300.0, 200.0),
            ElementKind::Icon => Size::new(48.0, 48.0),
            ElementKind::Gallery => Size::new(600.0, 400.0),
            ElementKind::Form => Size::new(400.0, 320.0),
            ElementKind::Container => Size::new(400.0, 300.0),
            ElementKind::Video => Size::new(480.0, 270.0),
            ElementKind::Divider => Size::new(400.0, 4.0),
        }
    }
}
