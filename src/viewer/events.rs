//! Wheel, keyboard, and touch event handlers for `PlotView`.
//!
//! Handlers are registered once at construction and kept alive in
//! `SharedState::listeners`. Each handler translates the DOM event into a
//! typed `InputEvent` and runs one controller reduction.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlElement, KeyboardEvent, TouchEvent, WheelEvent};

#[cfg(target_arch = "wasm32")]
use super::{PlotView, SharedState};
#[cfg(target_arch = "wasm32")]
use crate::controller::{InputEvent, ScrollKey};

#[cfg(target_arch = "wasm32")]
impl PlotView {
    pub(crate) fn register_event_handlers(
        state: &Rc<RefCell<SharedState>>,
        container: &HtmlElement,
    ) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let mut listeners = Vec::new();

        // Wheel: custom scrolling, so the native scroll never runs.
        {
            let weak = Rc::downgrade(state);
            let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
                event.prevent_default();
                if let (Some(state), Some(wheel)) =
                    (weak.upgrade(), event.dyn_ref::<WheelEvent>())
                {
                    let delta = wheel.delta_y() as f32;
                    Self::reduce(&state, InputEvent::Wheel { delta });
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            container
                .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())?;
            listeners.push(closure);
        }

        // Keyboard: arrows and page keys on the document.
        {
            let weak = Rc::downgrade(state);
            let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
                let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = match key_event.key().as_str() {
                    "ArrowUp" => ScrollKey::ArrowUp,
                    "ArrowDown" => ScrollKey::ArrowDown,
                    "PageUp" => ScrollKey::PageUp,
                    "PageDown" => ScrollKey::PageDown,
                    _ => return,
                };
                event.prevent_default();
                if let Some(state) = weak.upgrade() {
                    Self::reduce(&state, InputEvent::Key(key));
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            listeners.push(closure);
        }

        // Touch: record the start, turn the completed swipe into a delta.
        {
            let weak = Rc::downgrade(state);
            let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
                if let (Some(state), Some(touch_event)) =
                    (weak.upgrade(), event.dyn_ref::<TouchEvent>())
                {
                    if let Some(touch) = touch_event.touches().item(0) {
                        state.borrow_mut().touch_start_y = touch.client_y() as f32;
                    }
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            container
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            listeners.push(closure);
        }
        {
            let weak = Rc::downgrade(state);
            let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
                let Some(state) = weak.upgrade() else { return };
                let Some(touch_event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let Some(touch) = touch_event.changed_touches().item(0) else {
                    return;
                };
                // Positive delta = upward swipe = scroll down.
                let delta = state.borrow().touch_start_y - touch.client_y() as f32;
                Self::reduce(&state, InputEvent::TouchSwipe { delta });
            }) as Box<dyn FnMut(web_sys::Event)>);
            container
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
            listeners.push(closure);
        }

        // While the gate blocks, native touch scrolling is suppressed
        // entirely rather than clamped.
        {
            let weak = Rc::downgrade(state);
            let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
                if let Some(state) = weak.upgrade() {
                    if state.borrow().controller.is_blocked() {
                        event.prevent_default();
                    }
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            container
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            listeners.push(closure);
        }

        state.borrow_mut().listeners = listeners;
        Ok(())
    }
}
