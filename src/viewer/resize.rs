//! Debounced resize re-evaluation for `PlotView`.
//!
//! Repeated resize events cancel and restart a short timer so the gate
//! re-check runs once against settled layout (last-write-wins, no queued
//! re-entrant evaluations).

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use super::{PlotView, SharedState};
#[cfg(target_arch = "wasm32")]
use crate::controller::InputEvent;

/// Delay (ms) after the last resize event before re-running the gate check.
#[cfg(target_arch = "wasm32")]
const RESIZE_DEBOUNCE_MS: u32 = 150;

#[cfg(target_arch = "wasm32")]
pub(crate) fn schedule_resize_recheck(state: &Rc<RefCell<SharedState>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let mut s = state.borrow_mut();
    // Cancel any pending timer
    if let Some(timer_id) = s.resize_timer.take() {
        window.clear_timeout_with_handle(timer_id);
    }
    if s.resize_closure.is_none() {
        let weak_state = Rc::downgrade(state);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(state) = weak_state.upgrade() {
                state.borrow_mut().resize_timer = None;
                PlotView::reduce(&state, InputEvent::Resize);
            }
        }) as Box<dyn FnMut()>);
        s.resize_closure = Some(closure);
    }
    if let Some(callback) = s.resize_closure.as_ref() {
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            RESIZE_DEBOUNCE_MS as i32,
        ) {
            Ok(id) => s.resize_timer = Some(id),
            Err(_) => s.resize_timer = None,
        }
    }
}
