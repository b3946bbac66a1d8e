//! Structured error types for plotview.
//!
//! A single error enum covers parsing, plot assembly, and persistence so the
//! rest of the crate can use `Result<T>` throughout.

/// All errors that can occur while parsing pages or assembling a plot.
#[derive(Debug, thiserror::Error)]
pub enum PlotviewError {
    /// A config block was opened with `{` but never closed before end of
    /// input. The line number points at the opening brace.
    #[error("unterminated config block opened on line {line}")]
    UnterminatedBlock {
        /// 1-based line number of the opening `{`.
        line: usize,
    },

    /// Every page source was missing or failed to parse.
    #[error("no pages could be loaded")]
    EmptyPlot,

    /// Persisted progress could not be serialized.
    #[error("progress serialization: {0}")]
    Progress(#[from] serde_json::Error),

    /// General parse error.
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error (CLI file access).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlotviewError>;

impl From<String> for PlotviewError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for PlotviewError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<PlotviewError> for wasm_bindgen::JsValue {
    fn from(e: PlotviewError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
