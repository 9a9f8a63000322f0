//! Per-component configuration payload.

use crate::breakpoint::Breakpoint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum grid columns on tablet.
pub const TABLET_MAX_COLUMNS: u32 = 3;

/// Component-specific data carried by an element (button label, image
/// source, gallery column count, ...).
///
/// The column fields are the only part the responsive engine interprets:
/// grid-ish components collapse from N desktop columns to at most
/// [`TABLET_MAX_COLUMNS`] on tablet and a single column on mobile. Everything
/// else is an opaque payload owned by the component's renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentData {
    /// Desktop column count for grid-ish components (gallery, form rows).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    /// Derived tablet column count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet_columns: Option<u32>,
    /// Derived mobile column count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_columns: Option<u32>,
    /// Opaque component payload, preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ComponentData {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduce a desktop column count for a narrower breakpoint.
    pub fn columns_for(columns: u32, breakpoint: Breakpoint) -> u32 {
        match breakpoint {
            Breakpoint::Desktop => columns.max(1),
            Breakpoint::Tablet => columns.clamp(1, TABLET_MAX_COLUMNS),
            Breakpoint::Mobile => 1,
        }
    }

    /// Effective column count at a breakpoint, if this component is grid-ish.
    pub fn columns_at(&self, breakpoint: Breakpoint) -> Option<u32> {
        let base = self.columns?;
        let derived = match breakpoint {
            Breakpoint::Desktop => None,
            Breakpoint::Tablet => self.tablet_columns,
            Breakpoint::Mobile => self.mobile_columns,
        };
        Some(derived.unwrap_or_else(|| Self::columns_for(base, breakpoint)))
    }
}
