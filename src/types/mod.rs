//! Data types for the plot viewer.

mod element;
mod page;
mod progress;

pub use element::*;
pub use page::*;
pub use progress::*;
