//! Responsive synchronization: keeps the three breakpoint layouts of an
//! element tree consistent after one of them changes.
//!
//! The most recently changed breakpoint is always authoritative: syncing
//! re-derives the other two layouts from it and overwrites whatever was
//! there. There is no merging of independently edited breakpoints.

use crate::breakpoint::Breakpoint;
use crate::element::{ComponentData, Element};
use crate::overlap;
use crate::page::PageData;
use crate::scale;

/// Derive the other two breakpoints' layout for one element (and its
/// subtree) from the layout at `changed`.
///
/// Returns a new element graph; the input is untouched.
pub fn sync_element(element: &Element, changed: Breakpoint) -> Element {
    let mut synced = element.clone();
    sync_in_place(&mut synced, changed, &[]);
    synced
}

/// Sync every top-level element of a page, then resolve mobile overlaps
/// across the top level.
pub fn sync_all(page: &PageData, changed: Breakpoint) -> PageData {
    let mut synced_page = page.clone();
    synced_page.elements = sync_children(std::mem::take(&mut synced_page.elements), changed);
    synced_page
}

/// One-shot bootstrap for documents that predate responsive layouts: sync
/// (from desktop) only the elements still missing a tablet or mobile
/// position. Idempotent.
pub fn initialize_if_missing(page: &PageData) -> PageData {
    let mut initialized = page.clone();
    initialized.elements = initialized
        .elements
        .iter()
        .map(|element| {
            if element.needs_responsive_init() {
                sync_element(element, Breakpoint::Desktop)
            } else {
                element.clone()
            }
        })
        .collect();
    initialized
}

fn sync_in_place(element: &mut Element, changed: Breakpoint, siblings: &[Element]) {
    // Materialize the source layout first. Derived breakpoints may overwrite
    // the base size below, so the source must not keep reading through the
    // fallback chain.
    let source_size = element.size_at(changed);
    let source_position = element.position_at(changed);
    element.set_size_at(changed, source_size);
    element.set_position_at(changed, source_position);

    for target in changed.others() {
        let new_size = scale::scale_size(element, changed, target);
        let new_position = scale::scale_position(element, changed, target, new_size, siblings);
        element.set_size_at(target, new_size);
        element.set_position_at(target, new_position);

        if target != Breakpoint::Desktop {
            let overlay = derive_overlay(element, target);
            element.responsive_styles.set_overlay(target, overlay);
        }
    }

    element.children = sync_children(std::mem::take(&mut element.children), changed);
}

/// Sync a sibling list in order, giving each element visibility of the
/// already-synced siblings before it, then resolve mobile overlaps when
/// mobile was one of the derived targets.
fn sync_children(children: Vec<Element>, changed: Breakpoint) -> Vec<Element> {
    let mut synced: Vec<Element> = Vec::with_capacity(children.len());
    for mut child in children {
        sync_in_place(&mut child, changed, &synced);
        synced.push(child);
    }
    if changed != Breakpoint::Mobile {
        synced = overlap::resolve_overlaps(&synced, Breakpoint::Mobile);
    }
    synced
}

/// Recompute a breakpoint's style overlay from the desktop layer, including
/// the grid column collapse for grid-ish components.
fn derive_overlay(element: &mut Element, target: Breakpoint) -> crate::element::Styles {
    let mut overlay = scale::scale_styles(&element.styles, Breakpoint::Desktop, target);
    if let Some(columns) = element.component_data.columns {
        let reduced = ComponentData::columns_for(columns, target);
        overlay.set("grid-template-columns", scale::column_template(reduced));
        match target {
            Breakpoint::Tablet => element.component_data.tablet_columns = Some(reduced),
            Breakpoint::Mobile => element.component_data.mobile_columns = Some(reduced),
            Breakpoint::Desktop => {}
        }
    }
    overlay
}
