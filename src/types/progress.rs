use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Player progress: last committed scroll offset and solved puzzles.
///
/// One instance per browser profile; created empty on first load and never
/// explicitly destroyed. The completed set is monotonic — indices are only
/// ever added (storage corruption recovery resets the whole record instead).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Progress {
    /// Last committed scroll offset, clamped to `[0, max_scroll]` at every
    /// write.
    pub scroll_position: f32,
    /// Page indices whose puzzle has been solved.
    pub completed_puzzles: HashSet<usize>,
}

impl Progress {
    /// Record a solved puzzle.
    pub fn complete(&mut self, page_index: usize) {
        self.completed_puzzles.insert(page_index);
    }

    /// Whether a page's puzzle has been solved.
    pub fn is_completed(&self, page_index: usize) -> bool {
        self.completed_puzzles.contains(&page_index)
    }

    /// Commit a scroll offset, clamping into `[0, max_scroll]`.
    pub fn set_scroll(&mut self, offset: f32, max_scroll: f32) {
        self.scroll_position = offset.clamp(0.0, max_scroll.max(0.0));
    }
}

/// Wire shape of the persisted record:
/// `{ "scrollPosition": n, "completedPuzzles": [..] }`.
///
/// Kept separate from [`Progress`] so the in-memory set type and any future
/// fields never leak into storage. All fields default, so partially corrupt
/// records still deserialize where possible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressRecord {
    /// Persisted scroll offset.
    pub scroll_position: f32,
    /// Persisted solved-puzzle indices, sorted for stable output.
    pub completed_puzzles: Vec<usize>,
}

impl From<&Progress> for ProgressRecord {
    fn from(p: &Progress) -> Self {
        let mut completed: Vec<usize> = p.completed_puzzles.iter().copied().collect();
        completed.sort_unstable();
        Self {
            scroll_position: p.scroll_position.max(0.0),
            completed_puzzles: completed,
        }
    }
}

impl From<ProgressRecord> for Progress {
    fn from(r: ProgressRecord) -> Self {
        Self {
            scroll_position: r.scroll_position.max(0.0),
            completed_puzzles: r.completed_puzzles.into_iter().collect(),
        }
    }
}
