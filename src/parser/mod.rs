//! Page description parser.
//!
//! Turns the line-oriented page source format into a typed [`Page`]:
//!
//! ```text
//! <txt>{intro}</txt>
//! <pic>{cover}</pic>
//! <inputbox>{riddle}</inputbox>
//! {
//! intro = "plot/intro.txt"
//! cover = "plot/cover.png"
//! riddle = {
//! answer = "42"
//! }
//! }
//! ```
//!
//! Element declarations come first, one per line; a standalone `{` opens the
//! config block that binds content to each element by variable name.
//! Unrecognized lines are skipped — the parser never fails on unknown input.
//! The only structural error is a config block left open at end of input.

pub(crate) mod config;

use std::collections::HashMap;

use crate::error::{PlotviewError, Result};
use crate::types::{ConfigValue, Element, ElementKind, Page, Plot};

use config::parse_block;

/// Parse one page source into a [`Page`].
///
/// Deterministic and free of shared state: parsing the same text twice
/// yields structurally equal pages.
///
/// # Errors
/// [`PlotviewError::UnterminatedBlock`] if a config block is opened but
/// never closed before end of input.
pub fn parse_page(raw: &str, index: usize) -> Result<Page> {
    let mut elements: Vec<Element> = Vec::new();
    let mut config: HashMap<String, ConfigValue> = HashMap::new();

    let mut block_lines: Vec<&str> = Vec::new();
    let mut in_block = false;
    let mut depth: i32 = 0;
    let mut open_line = 0;

    for (i, raw_line) in raw.lines().enumerate() {
        let line = raw_line.trim();

        if in_block {
            if line == "}" && depth == 0 {
                in_block = false;
                config.extend(parse_block(&block_lines.join("\n")));
                block_lines.clear();
            } else {
                // Braces anywhere on the line adjust nesting, so a nested
                // block's close may share a line with other content.
                depth = (depth + brace_delta(line)).max(0);
                block_lines.push(line);
            }
            continue;
        }

        if let Some(name) = tag_variable(line, "txt") {
            elements.push(Element::new(ElementKind::Text, name));
        } else if let Some(name) = tag_variable(line, "pic") {
            elements.push(Element::new(ElementKind::Image, name));
        } else if let Some(name) = tag_variable(line, "inputbox") {
            elements.push(Element::new(ElementKind::Puzzle, name));
        } else if line == "{" {
            in_block = true;
            depth = 0;
            open_line = i + 1;
        }
        // Anything else (comments, blank lines, malformed tags) is skipped.
    }

    if in_block {
        return Err(PlotviewError::UnterminatedBlock { line: open_line });
    }

    // Bind config values to elements by exact variable-name match; unmatched
    // elements keep `content = None` and render as placeholders.
    for element in &mut elements {
        if let Some(value) = config.get(&element.variable_name) {
            element.content = Some(value.clone());
        }
    }

    Ok(Page::new(index, elements))
}

/// Assemble a plot from per-page sources, in document order.
///
/// `None` entries (missing/unfetchable sources) and pages that fail to parse
/// are skipped and recorded; surviving pages are re-indexed contiguously.
///
/// # Errors
/// [`PlotviewError::EmptyPlot`] when no page survives — callers must treat
/// this differently from a partial plot.
pub fn parse_plot(sources: &[Option<&str>]) -> Result<Plot> {
    let mut pages = Vec::new();
    let mut missing = Vec::new();

    for (i, source) in sources.iter().enumerate() {
        match source {
            Some(text) => match parse_page(text, pages.len()) {
                Ok(page) => pages.push(page),
                Err(_) => missing.push(i),
            },
            None => missing.push(i),
        }
    }

    if pages.is_empty() {
        return Err(PlotviewError::EmptyPlot);
    }
    Ok(Plot { pages, missing })
}

/// Extract the variable name from a single-line `<tag>{name}</tag>`
/// declaration. Returns `None` for anything that doesn't match exactly.
fn tag_variable(line: &str, tag: &str) -> Option<String> {
    let body = line
        .strip_prefix('<')?
        .strip_prefix(tag)?
        .strip_prefix('>')?
        .strip_suffix('>')?
        .strip_suffix(tag)?
        .strip_suffix("</")?;
    let name = body.trim().strip_prefix('{')?.strip_suffix('}')?.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Net brace depth change contributed by one line.
fn brace_delta(line: &str) -> i32 {
    let mut delta = 0;
    for ch in line.chars() {
        match ch {
            '{' => delta += 1,
            '}' => delta -= 1,
            _ => {}
        }
    }
    delta
}
