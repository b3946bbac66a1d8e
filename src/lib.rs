//! plotview - puzzle-gated scroll narrative engine for the web
//!
//! Parses a small page-description markup into a typed page model and drives
//! a continuous-scroll controller where unsolved puzzles gate forward
//! progress:
//! - Line-oriented page format: `<txt>`, `<pic>`, `<inputbox>` declarations
//!   bound to a brace-delimited config block (nested blocks supported)
//! - Viewport-intersection gate evaluation with safe-position recovery
//! - Wheel/key/touch input reduced into clamped, persisted offset updates
//! - Progress persisted to localStorage, self-healing on corruption
//!
//! Rendering stays in JavaScript: the collaborator draws the parsed pages,
//! supplies layout snapshots, and executes the controller's effects.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { PlotView } from 'plotview';
//! await init();
//! const viewer = new PlotView(container);
//! viewer.on_effect((name, value) => { ... });
//! const plot = await viewer.load_from_urls(['plot/p1.txt', 'plot/p2.txt']);
//! viewer.set_layout(measure(plot.pages));
//! ```

// Core modules
pub mod controller;
pub mod error;
pub mod gate;
pub mod layout;
pub mod parser;
pub mod puzzle;
pub mod store;
pub mod types;

// Browser glue
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main viewer struct
pub use viewer::PlotView;

pub use types::*;

/// Parse one page source and return the page model as a JSON string.
///
/// # Arguments
/// * `raw` - The page source text
/// * `index` - Zero-based position of the page in the sequence
///
/// # Errors
/// Returns an error if a config block is left unterminated.
#[wasm_bindgen]
pub fn parse_page(raw: &str, index: usize) -> Result<String, JsValue> {
    let page = parser::parse_page(raw, index).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&page)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Parse one page source and return the page model as a `JsValue`.
///
/// This is more efficient than `parse_page` when the result will be used
/// directly in JavaScript.
///
/// # Errors
/// Returns an error if a config block is left unterminated.
#[wasm_bindgen]
pub fn parse_page_to_js(raw: &str, index: usize) -> Result<JsValue, JsValue> {
    let page = parser::parse_page(raw, index).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&page)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
