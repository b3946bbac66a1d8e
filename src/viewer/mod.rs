//! Main `PlotView` struct - the wasm-exported entry point.
//!
//! The viewer owns the parsed page model, the scroll controller, and the
//! latest layout snapshot, and wires DOM input events into controller
//! reductions. It never renders: effects are forwarded to a JS callback and
//! the collaborator draws pages, hints, and puzzle panels itself.
//!
//! Event handlers are registered when the viewer is created - no manual
//! JavaScript wiring required.

mod events;
mod fetch;
mod resize;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlElement;

#[cfg(target_arch = "wasm32")]
use crate::controller::{Effect, InputEvent, ScrollController};
#[cfg(target_arch = "wasm32")]
use crate::layout::LayoutSnapshot;
#[cfg(target_arch = "wasm32")]
use crate::puzzle::PuzzleKeys;
#[cfg(target_arch = "wasm32")]
use crate::store::{LocalStorageStore, ProgressStore};
#[cfg(target_arch = "wasm32")]
use crate::types::Page;

/// Shared state that can be accessed by event handlers (wasm32 only).
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) pages: Vec<Page>,
    pub(crate) controller: ScrollController,
    pub(crate) layout: LayoutSnapshot,
    pub(crate) store: LocalStorageStore,
    /// JS callback receiving `(effectName, value)` pairs.
    pub(crate) effect_callback: Option<Function>,
    pub(crate) touch_start_y: f32,
    pub(crate) resize_timer: Option<i32>,
    pub(crate) resize_closure: Option<Closure<dyn FnMut()>>,
    /// Keeps registered DOM closures alive for the viewer's lifetime.
    pub(crate) listeners: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

/// Puzzle-gated scroll viewer.
#[wasm_bindgen]
pub struct PlotView {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl PlotView {
    /// Create a viewer bound to the scrollable container element.
    ///
    /// Restores progress from localStorage and registers wheel, key, and
    /// touch handlers on the container/document.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement) -> Result<PlotView, JsValue> {
        console_error_panic_hook::set_once();

        let store = LocalStorageStore;
        let progress = store.load();
        let state = Rc::new(RefCell::new(SharedState {
            pages: Vec::new(),
            controller: ScrollController::new(progress, PuzzleKeys::default()),
            layout: LayoutSnapshot::new(Vec::new(), 0.0, 0.0),
            store,
            effect_callback: None,
            touch_start_y: 0.0,
            resize_timer: None,
            resize_closure: None,
            listeners: Vec::new(),
        }));

        Self::register_event_handlers(&state, &container)?;
        Ok(PlotView { state })
    }

    /// Parse page sources (array of strings; `null` marks a failed fetch)
    /// and return the page model for rendering.
    ///
    /// # Errors
    /// Rejects when no page survives parsing ("empty page set"), which the
    /// collaborator must report distinctly from a partial set.
    pub fn load_sources(&self, sources: Vec<JsValue>) -> Result<JsValue, JsValue> {
        let owned: Vec<Option<String>> = sources.iter().map(JsValue::as_string).collect();
        let borrowed: Vec<Option<&str>> = owned.iter().map(Option::as_deref).collect();
        let plot = crate::parser::parse_plot(&borrowed)?;

        let mut s = self.state.borrow_mut();
        s.pages = plot.pages.clone();
        serde_wasm_bindgen::to_value(&plot).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Fetch page sources from URLs, then behave like `load_sources`.
    /// Unfetchable pages become `null` entries (partial plot).
    pub fn load_from_urls(&self, urls: Vec<String>) -> js_sys::Promise {
        fetch::load_from_urls(Rc::clone(&self.state), urls)
    }

    /// Install the effect callback: called as `callback(name, value)` with
    /// `forceOffset`, `scrollHint`, `puzzleLock`, or `touchLock`.
    pub fn on_effect(&self, callback: Function) {
        self.state.borrow_mut().effect_callback = Some(callback);
    }

    /// Accept a fresh layout snapshot from the collaborator:
    /// `{ pages: [{top, bottom, puzzle?}], viewportHeight, maxScroll }`.
    pub fn set_layout(&self, snapshot: JsValue) -> Result<(), JsValue> {
        let layout: LayoutSnapshot =
            serde_wasm_bindgen::from_value(snapshot).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mut s = self.state.borrow_mut();
        let s = &mut *s;
        s.layout = layout;
        // Surface hint/lock state for a restored session before any input.
        let effects = s.controller.refresh(&s.pages, &s.layout);
        Self::apply_effects(s, effects);
        Ok(())
    }

    /// Whether the "more content below" hint should be showing.
    pub fn scroll_hint(&self) -> bool {
        self.state.borrow().controller.hint()
    }

    /// Debounced notification that the viewport resized; the gate re-check
    /// runs against the latest snapshot once resize events settle.
    pub fn notify_resize(&self) {
        resize::schedule_resize_recheck(&self.state);
    }

    /// Submit a puzzle answer for a page. Returns
    /// `{result: "correct"}` or `{result: "incorrect", message}`.
    pub fn submit_answer(&self, page_index: usize, guess: String) -> Result<JsValue, JsValue> {
        let outcome = {
            let mut s = self.state.borrow_mut();
            let s = &mut *s;
            let (outcome, effects) = s.controller.solve(page_index, &guess, &s.pages, &s.layout);
            Self::apply_effects(s, effects);
            outcome
        };
        serde_wasm_bindgen::to_value(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current committed scroll offset.
    pub fn offset(&self) -> f32 {
        self.state.borrow().controller.offset()
    }

    /// Whether an unsolved puzzle currently blocks forward scrolling.
    pub fn is_blocked(&self) -> bool {
        self.state.borrow().controller.is_blocked()
    }

    /// Solved puzzle indices, sorted.
    pub fn completed_puzzles(&self) -> Vec<usize> {
        let s = self.state.borrow();
        let mut completed: Vec<usize> = s.controller.completed().iter().copied().collect();
        completed.sort_unstable();
        completed
    }
}

#[cfg(target_arch = "wasm32")]
impl PlotView {
    /// Run one reduction and execute its effects.
    pub(crate) fn reduce(state: &Rc<RefCell<SharedState>>, event: InputEvent) {
        let mut s = state.borrow_mut();
        let s = &mut *s;
        let effects = s.controller.reduce(event, &s.pages, &s.layout);
        Self::apply_effects(s, effects);
    }

    /// Persist internally; forward everything else to the JS callback.
    pub(crate) fn apply_effects(s: &mut SharedState, effects: Vec<Effect>) {
        for effect in effects {
            let (name, value) = match effect {
                Effect::Persist(_) => {
                    let progress = s.controller.progress().clone();
                    s.store.save(&progress);
                    continue;
                }
                Effect::ForceOffset(offset) => ("forceOffset", JsValue::from_f64(f64::from(offset))),
                Effect::ScrollHint(on) => ("scrollHint", JsValue::from_bool(on)),
                Effect::PuzzleLock(on) => ("puzzleLock", JsValue::from_bool(on)),
                Effect::TouchLock(on) => ("touchLock", JsValue::from_bool(on)),
            };
            if let Some(callback) = &s.effect_callback {
                let _ = callback.call2(&JsValue::NULL, &JsValue::from_str(name), &value);
            }
        }
    }
}
