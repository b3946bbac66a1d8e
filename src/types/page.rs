use serde::{Deserialize, Serialize};

use super::{Element, ElementKind};

/// One scroll-addressable narrative unit, parsed from a single page source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Zero-based position in the page sequence. Ordering is fixed at parse
    /// time; rendering and gating both iterate in index order.
    pub index: usize,
    /// Elements in declaration order (rendering order).
    pub elements: Vec<Element>,
    /// Derived: true iff any element is a puzzle. While unsolved, such a
    /// page gates forward scrolling whenever its puzzle is in view.
    pub has_puzzle: bool,
}

impl Page {
    /// Build a page from parsed elements, deriving `has_puzzle`.
    pub fn new(index: usize, elements: Vec<Element>) -> Self {
        let has_puzzle = elements.iter().any(|e| e.kind == ElementKind::Puzzle);
        Self {
            index,
            elements,
            has_puzzle,
        }
    }

    /// The page's first puzzle element, if any.
    pub fn puzzle(&self) -> Option<&Element> {
        self.elements.iter().find(|e| e.kind == ElementKind::Puzzle)
    }
}

/// The full ordered page collection plus load bookkeeping.
///
/// A plot where some sources failed is *partial* (usable, degraded); a plot
/// where none loaded is rejected at assembly time, so `pages` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plot {
    /// Pages in document order, re-indexed after skipping failures.
    pub pages: Vec<Page>,
    /// Original source positions that were missing or failed to parse.
    pub missing: Vec<usize>,
}

impl Plot {
    /// True when at least one page source was skipped.
    pub fn is_partial(&self) -> bool {
        !self.missing.is_empty()
    }

    /// Number of loaded pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false for an assembled plot; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
