//! Puzzle gate evaluation.
//!
//! Pure geometry checks: given the page model, the solved set, and a layout
//! snapshot, decide whether an unsolved puzzle blocks forward scrolling at a
//! given offset, and find the nearest offset where nothing blocks. Nothing
//! here mutates progress or pages; callers act on the results.

use std::collections::HashSet;

use crate::layout::LayoutSnapshot;
use crate::types::Page;

/// Tolerance applied symmetrically to the viewport bounds, absorbing
/// sub-pixel and layout jitter. The viewport is inflated, so a puzzle
/// hovering at the edge counts as in view.
pub const GATE_TOLERANCE: f32 = 10.0;

/// Step size for the downward probe in [`find_safe_position`].
pub const SAFE_PROBE_STEP: f32 = 10.0;

/// Find the first page whose unsolved puzzle is in view at `offset`.
///
/// Pages are scanned in index order so earlier puzzles win; the first hit
/// short-circuits. A page blocks iff it has a puzzle, its index is not in
/// `completed`, and its gate bounds (the puzzle element's own extent when
/// measured, otherwise the whole page) intersect the tolerance-inflated
/// viewport by open-interval overlap.
pub fn blocking_page(
    pages: &[Page],
    completed: &HashSet<usize>,
    layout: &LayoutSnapshot,
    offset: f32,
) -> Option<usize> {
    let viewport = layout.viewport_at(offset).inflated(GATE_TOLERANCE);

    for page in pages {
        if !page.has_puzzle || completed.contains(&page.index) {
            continue;
        }
        let Some(bounds) = layout.page(page.index) else {
            // Not yet measured by the collaborator; cannot gate on it.
            continue;
        };
        if bounds.gate_bounds().overlaps(&viewport) {
            return Some(page.index);
        }
    }
    None
}

/// Whether any unsolved puzzle blocks at `offset`.
pub fn is_blocked(
    pages: &[Page],
    completed: &HashSet<usize>,
    layout: &LayoutSnapshot,
    offset: f32,
) -> bool {
    blocking_page(pages, completed, layout, offset).is_some()
}

/// Probe downward from `from` in fixed steps and return the first offset
/// where nothing blocks, or `0.0` when every candidate down to the origin
/// is blocked.
///
/// This is the recovery path after a viewport resize moves a still-unsolved
/// puzzle into view at the current offset.
pub fn find_safe_position(
    pages: &[Page],
    completed: &HashSet<usize>,
    layout: &LayoutSnapshot,
    from: f32,
) -> f32 {
    let mut candidate = layout.clamp(from);
    while candidate > 0.0 {
        if !is_blocked(pages, completed, layout, candidate) {
            return candidate;
        }
        candidate -= SAFE_PROBE_STEP;
    }
    0.0
}
