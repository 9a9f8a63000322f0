//! Breakpoint definitions for the three canvas widths the editor targets.

use serde::{Deserialize, Serialize};

/// Canonical desktop canvas width in pixels.
pub const DESKTOP_WIDTH: f64 = 1200.0;
/// Canonical tablet canvas width in pixels.
pub const TABLET_WIDTH: f64 = 768.0;
/// Canonical mobile canvas width in pixels.
pub const MOBILE_WIDTH: f64 = 375.0;

/// A responsive breakpoint.
///
/// This is a closed enumeration used as a key into per-breakpoint layout
/// data (positions, size overrides, style overlays). It is never stored as
/// document data itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// The authoring canvas, 1200px wide.
    #[default]
    Desktop,
    /// 768px wide.
    Tablet,
    /// 375px wide.
    Mobile,
}

impl Breakpoint {
    /// All breakpoints, widest first.
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Desktop, Breakpoint::Tablet, Breakpoint::Mobile];

    /// Canonical canvas width for this breakpoint.
    pub fn canvas_width(self) -> f64 {
        match self {
            Breakpoint::Desktop => DESKTOP_WIDTH,
            Breakpoint::Tablet => TABLET_WIDTH,
            Breakpoint::Mobile => MOBILE_WIDTH,
        }
    }

    /// The two breakpoints other than this one.
    pub fn others(self) -> [Breakpoint; 2] {
        match self {
            Breakpoint::Desktop => [Breakpoint::Tablet, Breakpoint::Mobile],
            Breakpoint::Tablet => [Breakpoint::Desktop, Breakpoint::Mobile],
            Breakpoint::Mobile => [Breakpoint::Desktop, Breakpoint::Tablet],
        }
    }

    /// Ratio of `to`'s canonical width to `from`'s.
    ///
    /// All proportional size/position/style scaling derives from this single
    /// factor.
    pub fn scale_factor(from: Breakpoint, to: Breakpoint) -> f64 {
        to.canvas_width() / from.canvas_width()
    }
}
