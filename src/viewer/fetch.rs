//! Async page-source fetching for `PlotView`.
//!
//! Fetches are not cancelable; a failed fetch yields a `null` slot so the
//! plot loads partially rather than aborting. The whole page model stays
//! unavailable until every fetch has settled — no partial-page rendering.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::{future_to_promise, JsFuture};
#[cfg(target_arch = "wasm32")]
use web_sys::Response;

#[cfg(target_arch = "wasm32")]
use super::SharedState;

/// Fetch one text resource; any failure maps to `None`.
#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Option<String> {
    let window = web_sys::window()?;
    let response_value = JsFuture::from(window.fetch_with_str(url)).await.ok()?;
    let response: Response = response_value.dyn_into().ok()?;
    if !response.ok() {
        return None;
    }
    let text = JsFuture::from(response.text().ok()?).await.ok()?;
    text.as_string()
}

/// Fetch all page sources, parse the plot, and install its pages.
///
/// Resolves to the serialized plot (pages plus missing indices); rejects
/// when nothing loaded.
#[cfg(target_arch = "wasm32")]
pub(crate) fn load_from_urls(
    state: Rc<RefCell<SharedState>>,
    urls: Vec<String>,
) -> js_sys::Promise {
    future_to_promise(async move {
        let mut sources: Vec<Option<String>> = Vec::with_capacity(urls.len());
        for url in &urls {
            let text = fetch_text(url).await;
            if text.is_none() {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "plotview: failed to load page source {url}"
                )));
            }
            sources.push(text);
        }
        let borrowed: Vec<Option<&str>> = sources.iter().map(Option::as_deref).collect();
        let plot = crate::parser::parse_plot(&borrowed)?;

        state.borrow_mut().pages = plot.pages.clone();
        serde_wasm_bindgen::to_value(&plot).map_err(|e| JsValue::from_str(&e.to_string()))
    })
}
