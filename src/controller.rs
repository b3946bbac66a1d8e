//! Scroll controller: a reducer over typed input events.
//!
//! Wheel, key, touch, and resize input all collapse into clamped offset
//! updates consulting the gate evaluator. The reducer is pure with respect
//! to the outside world — it mutates only its own state and describes side
//! effects as [`Effect`] values for the rendering collaborator to execute
//! (persist the record, snap the scroll position, toggle hints and locks).

use std::collections::HashSet;

use crate::gate::{find_safe_position, is_blocked};
use crate::layout::LayoutSnapshot;
use crate::puzzle::{check_answer, PuzzleKeys, SubmitOutcome};
use crate::types::{Page, Progress, ProgressRecord};

/// Offset change for a single arrow-key press.
pub const KEY_SCROLL_STEP: f32 = 80.0;

/// Minimum swipe distance before touch input scrolls, matching the original
/// touch handling.
pub const TOUCH_SWIPE_THRESHOLD: f32 = 50.0;

/// Slack below `max_scroll` under which the forward hint turns off.
pub const SCROLL_HINT_EPSILON: f32 = 1.0;

/// Scroll-affecting keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollKey {
    /// Scroll up by one step.
    ArrowUp,
    /// Scroll down by one step.
    ArrowDown,
    /// Scroll up by one viewport height.
    PageUp,
    /// Scroll down by one viewport height.
    PageDown,
}

/// Typed union of the input events the controller consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Wheel movement; positive delta scrolls down.
    Wheel {
        /// Signed offset change.
        delta: f32,
    },
    /// Key press.
    Key(ScrollKey),
    /// Completed touch swipe; positive delta scrolls down. Swipes shorter
    /// than [`TOUCH_SWIPE_THRESHOLD`] are ignored.
    TouchSwipe {
        /// Signed swipe distance.
        delta: f32,
    },
    /// Viewport geometry changed; re-check the gate at the current offset.
    Resize,
}

/// Side effects for the collaborator to execute after a reduction.
///
/// Hint and lock effects are emitted only on transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write the record to the progress store.
    Persist(ProgressRecord),
    /// Snap the scroll position immediately (resize recovery only).
    ForceOffset(f32),
    /// Show or hide the "more content below" hint.
    ScrollHint(bool),
    /// Lock or unlock the puzzle panel.
    PuzzleLock(bool),
    /// Suppress or restore native touch scrolling.
    TouchLock(bool),
}

/// Gated scroll state machine over a continuous offset in `[0, max_scroll]`.
#[derive(Debug)]
pub struct ScrollController {
    progress: Progress,
    blocked: bool,
    hint: bool,
    touch_locked: bool,
    keys: PuzzleKeys,
}

impl ScrollController {
    /// Create a controller from restored progress.
    pub fn new(progress: Progress, keys: PuzzleKeys) -> Self {
        Self {
            progress,
            blocked: false,
            hint: false,
            touch_locked: false,
            keys,
        }
    }

    /// Current committed offset.
    pub fn offset(&self) -> f32 {
        self.progress.scroll_position
    }

    /// Whether a gate is currently blocking forward scroll.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Whether the "more content below" hint is showing.
    pub fn hint(&self) -> bool {
        self.hint
    }

    /// Evaluate the gate and hint at the current offset without moving it,
    /// emitting effects for whichever signals changed.
    ///
    /// Run this once after the layout snapshot is (re)installed so a
    /// restored session shows its hint and lock state before any input.
    pub fn refresh(&mut self, pages: &[Page], layout: &LayoutSnapshot) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.refresh_signals(pages, layout, &mut effects);
        effects
    }

    /// Solved puzzle indices.
    pub fn completed(&self) -> &HashSet<usize> {
        &self.progress.completed_puzzles
    }

    /// Snapshot of the progress for persistence.
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Consume one input event against the current page model and layout.
    pub fn reduce(
        &mut self,
        event: InputEvent,
        pages: &[Page],
        layout: &LayoutSnapshot,
    ) -> Vec<Effect> {
        match event {
            InputEvent::Wheel { delta } => self.apply_delta(delta, pages, layout),
            InputEvent::Key(key) => {
                let delta = match key {
                    ScrollKey::ArrowUp => -KEY_SCROLL_STEP,
                    ScrollKey::ArrowDown => KEY_SCROLL_STEP,
                    ScrollKey::PageUp => -layout.viewport_height,
                    ScrollKey::PageDown => layout.viewport_height,
                };
                self.apply_delta(delta, pages, layout)
            }
            InputEvent::TouchSwipe { delta } => {
                if delta.abs() < TOUCH_SWIPE_THRESHOLD {
                    return Vec::new();
                }
                self.apply_delta(delta, pages, layout)
            }
            InputEvent::Resize => self.recheck_after_resize(pages, layout),
        }
    }

    /// Submit an answer for a page's puzzle.
    ///
    /// A correct answer records the page index, persists, and re-evaluates
    /// the gate and hint at the current offset without moving it. A wrong
    /// answer changes nothing and carries a message for display.
    pub fn solve(
        &mut self,
        page_index: usize,
        guess: &str,
        pages: &[Page],
        layout: &LayoutSnapshot,
    ) -> (SubmitOutcome, Vec<Effect>) {
        let Some(element) = pages
            .iter()
            .find(|p| p.index == page_index)
            .and_then(Page::puzzle)
        else {
            return (
                SubmitOutcome::Incorrect {
                    message: crate::puzzle::DEFAULT_ERROR_MESSAGE.to_string(),
                },
                Vec::new(),
            );
        };

        let outcome = check_answer(element, guess, &self.keys);
        if !outcome.is_correct() {
            return (outcome, Vec::new());
        }

        self.progress.complete(page_index);
        let mut effects = vec![Effect::Persist(ProgressRecord::from(&self.progress))];
        self.refresh_signals(pages, layout, &mut effects);
        (outcome, effects)
    }

    /// Clamp, gate-check, and commit one signed offset change.
    fn apply_delta(&mut self, delta: f32, pages: &[Page], layout: &LayoutSnapshot) -> Vec<Effect> {
        let current = self.progress.scroll_position;
        let requested = layout.clamp(current + delta);
        let mut effects = Vec::new();

        let forward = requested > current;
        if forward && is_blocked(pages, &self.progress.completed_puzzles, layout, requested) {
            // Reject: offset unchanged, nothing persisted.
            self.set_blocked(true, &mut effects);
            self.set_hint(false, &mut effects);
            return effects;
        }

        // Backward moves are never blocked; commit and persist.
        self.progress.set_scroll(requested, layout.max_scroll);
        effects.push(Effect::Persist(ProgressRecord::from(&self.progress)));
        self.refresh_signals(pages, layout, &mut effects);
        effects
    }

    /// Re-run the gate at the current offset after a layout change; snap to
    /// a safe position if reflow moved an unsolved puzzle into view.
    fn recheck_after_resize(&mut self, pages: &[Page], layout: &LayoutSnapshot) -> Vec<Effect> {
        let mut effects = Vec::new();
        let completed = self.progress.completed_puzzles.clone();
        let current = layout.clamp(self.progress.scroll_position);

        let target = if is_blocked(pages, &completed, layout, current) {
            find_safe_position(pages, &completed, layout, current)
        } else {
            current
        };

        if (target - self.progress.scroll_position).abs() > f32::EPSILON {
            self.progress.set_scroll(target, layout.max_scroll);
            // Immediate snap, no animation.
            effects.push(Effect::ForceOffset(target));
            effects.push(Effect::Persist(ProgressRecord::from(&self.progress)));
        }

        self.refresh_signals(pages, layout, &mut effects);
        effects
    }

    /// Derive blocked/hint/touch-lock signals from the gate at the current
    /// offset, emitting effects for whichever changed.
    fn refresh_signals(&mut self, pages: &[Page], layout: &LayoutSnapshot, effects: &mut Vec<Effect>) {
        let offset = self.progress.scroll_position;
        let blocked_now = is_blocked(pages, &self.progress.completed_puzzles, layout, offset);
        self.set_blocked(blocked_now, effects);

        let hint = offset < layout.max_scroll - SCROLL_HINT_EPSILON && !blocked_now;
        self.set_hint(hint, effects);
    }

    fn set_blocked(&mut self, blocked: bool, effects: &mut Vec<Effect>) {
        if self.blocked != blocked {
            self.blocked = blocked;
            effects.push(Effect::PuzzleLock(blocked));
        }
        // Touch scrolling is suppressed for exactly the duration of a block.
        if self.touch_locked != blocked {
            self.touch_locked = blocked;
            effects.push(Effect::TouchLock(blocked));
        }
    }

    fn set_hint(&mut self, hint: bool, effects: &mut Vec<Effect>) {
        if self.hint != hint {
            self.hint = hint;
            effects.push(Effect::ScrollHint(hint));
        }
    }
}
