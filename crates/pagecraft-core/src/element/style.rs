//! Style bags and the per-breakpoint style cascade.

use crate::breakpoint::Breakpoint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An open bag of presentation properties ("font-size" -> "16px", ...).
///
/// Keys are CSS-ish property names; values are raw strings owned by the
/// rendering layer. The core only interprets `px` tokens when deriving
/// responsive overlays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Styles(pub BTreeMap<String, String>);

impl Styles {
    /// Create an empty style bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    /// Remove a property.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.0.remove(property)
    }

    /// Whether the bag has no properties.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(property, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` on top of this bag, returning the merged result.
    pub fn merged_with(&self, other: &Styles) -> Styles {
        let mut merged = self.clone();
        for (property, value) in other.iter() {
            merged.set(property, value);
        }
        merged
    }
}

impl FromIterator<(String, String)> for Styles {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Styles(iter.into_iter().collect())
    }
}

/// Breakpoint-scoped style overlays.
///
/// The element's base `styles` bag is the desktop layer; the tablet and
/// mobile overlays hold only the properties that differ. Resolution
/// cascades narrow-over-wide: mobile overrides tablet overrides desktop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsiveStyles {
    #[serde(default, skip_serializing_if = "Styles::is_empty")]
    pub tablet: Styles,
    #[serde(default, skip_serializing_if = "Styles::is_empty")]
    pub mobile: Styles,
}

impl ResponsiveStyles {
    /// Replace the overlay for a breakpoint. Setting the desktop layer is a
    /// no-op; that layer lives in the element's base styles.
    pub fn set_overlay(&mut self, breakpoint: Breakpoint, overlay: Styles) {
        match breakpoint {
            Breakpoint::Desktop => {}
            Breakpoint::Tablet => self.tablet = overlay,
            Breakpoint::Mobile => self.mobile = overlay,
        }
    }

    /// The overlay stored for a breakpoint (empty for desktop).
    pub fn overlay(&self, breakpoint: Breakpoint) -> Option<&Styles> {
        match breakpoint {
            Breakpoint::Desktop => None,
            Breakpoint::Tablet => Some(&self.tablet),
            Breakpoint::Mobile => Some(&self.mobile),
        }
    }

    /// Resolve the effective styles at a breakpoint over the given base.
    pub fn resolve(&self, base: &Styles, breakpoint: Breakpoint) -> Styles {
        match breakpoint {
            Breakpoint::Desktop => base.clone(),
            Breakpoint::Tablet => base.merged_with(&self.tablet),
            Breakpoint::Mobile => base.merged_with(&self.tablet).merged_with(&self.mobile),
        }
    }
}
