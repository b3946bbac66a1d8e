//! Layout geometry supplied by the rendering collaborator.
//!
//! The core never touches the DOM: gate evaluation and scroll clamping work
//! against a [`LayoutSnapshot`] injected from outside (or built synthetically
//! in tests), refreshed by the collaborator whenever content height changes.

mod snapshot;

pub use snapshot::{Bounds, LayoutSnapshot, PageBounds};
