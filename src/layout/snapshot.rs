//! Snapshot of page and viewport geometry in content coordinates.

use serde::{Deserialize, Serialize};

/// A vertical range in content coordinates (`top <= bottom`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    /// Top edge offset.
    pub top: f32,
    /// Bottom edge offset.
    pub bottom: f32,
}

impl Bounds {
    /// Construct a range.
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// Open-interval overlap test: touching edges do not count.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.top < other.bottom && self.bottom > other.top
    }

    /// Grow the range by `amount` on both ends.
    pub fn inflated(&self, amount: f32) -> Bounds {
        Bounds {
            top: self.top - amount,
            bottom: self.bottom + amount,
        }
    }
}

/// On-screen extent of one page, with the puzzle input's own extent when the
/// collaborator can measure it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBounds {
    /// Top edge of the page.
    pub top: f32,
    /// Bottom edge of the page.
    pub bottom: f32,
    /// Extent of the puzzle input element, if measured separately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puzzle: Option<Bounds>,
}

impl PageBounds {
    /// Whole-page range.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.top, self.bottom)
    }

    /// Range used for gate intersection: the puzzle element's own bounds
    /// when available, otherwise the whole page.
    pub fn gate_bounds(&self) -> Bounds {
        self.puzzle.unwrap_or_else(|| self.bounds())
    }
}

/// Per-page and viewport geometry, queried on demand.
///
/// Page entries are indexed by page index. `max_scroll` is recomputed by the
/// collaborator on every content-height change and treated as opaque here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    /// Bounds per page index, in content coordinates.
    pub pages: Vec<PageBounds>,
    /// Height of the visible viewport.
    pub viewport_height: f32,
    /// Maximum committable scroll offset.
    pub max_scroll: f32,
}

impl LayoutSnapshot {
    /// Build a snapshot from explicit page bounds.
    pub fn new(pages: Vec<PageBounds>, viewport_height: f32, max_scroll: f32) -> Self {
        Self {
            pages,
            viewport_height,
            max_scroll: max_scroll.max(0.0),
        }
    }

    /// Synthetic snapshot with uniformly sized pages stacked top to bottom.
    /// Mostly useful in tests and the CLI.
    pub fn uniform(page_count: usize, page_height: f32, viewport_height: f32) -> Self {
        let pages = (0..page_count)
            .map(|i| PageBounds {
                top: i as f32 * page_height,
                bottom: (i as f32 + 1.0) * page_height,
                puzzle: None,
            })
            .collect();
        let total = page_count as f32 * page_height;
        Self {
            pages,
            viewport_height,
            max_scroll: (total - viewport_height).max(0.0),
        }
    }

    /// Bounds for a page index, if the collaborator reported it.
    pub fn page(&self, index: usize) -> Option<&PageBounds> {
        self.pages.get(index)
    }

    /// The viewport range when scrolled to `offset`.
    pub fn viewport_at(&self, offset: f32) -> Bounds {
        Bounds::new(offset, offset + self.viewport_height)
    }

    /// Clamp an offset into `[0, max_scroll]`.
    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_scroll.max(0.0))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_open_interval_overlap() {
        let a = Bounds::new(0.0, 10.0);
        assert!(a.overlaps(&Bounds::new(5.0, 15.0)));
        // Touching edges do not overlap.
        assert!(!a.overlaps(&Bounds::new(10.0, 20.0)));
        assert!(!a.overlaps(&Bounds::new(-5.0, 0.0)));
    }

    #[test]
    fn test_uniform_snapshot() {
        let layout = LayoutSnapshot::uniform(3, 600.0, 600.0);
        assert_eq!(layout.pages.len(), 3);
        assert_eq!(layout.page(1).unwrap().top, 600.0);
        assert_eq!(layout.max_scroll, 1200.0);
        assert_eq!(layout.viewport_at(100.0), Bounds::new(100.0, 700.0));
    }

    #[test]
    fn test_clamp() {
        let layout = LayoutSnapshot::uniform(2, 600.0, 600.0);
        assert_eq!(layout.clamp(-50.0), 0.0);
        assert_eq!(layout.clamp(10_000.0), 600.0);
    }

    #[test]
    fn test_gate_bounds_prefers_puzzle_extent() {
        let page = PageBounds {
            top: 0.0,
            bottom: 600.0,
            puzzle: Some(Bounds::new(400.0, 460.0)),
        };
        assert_eq!(page.gate_bounds(), Bounds::new(400.0, 460.0));
        let plain = PageBounds {
            top: 0.0,
            bottom: 600.0,
            puzzle: None,
        };
        assert_eq!(plain.gate_bounds(), Bounds::new(0.0, 600.0));
    }
}
