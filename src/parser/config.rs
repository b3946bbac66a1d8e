//! Config block grammar: `key = value` lines with nested brace blocks.
//!
//! A block body is the text between a page's standalone `{` / `}` lines.
//! Values are bare or quoted scalars, or nested `{ ... }` blocks which may
//! span lines and share lines with other tokens. Nested blocks are collected
//! by brace-depth counting and parsed recursively with the same grammar.

use std::collections::HashMap;

use crate::types::ConfigValue;

/// Parse a block body into a key/value map.
///
/// One assignment per line; lines without `=` (comments, stray text) are
/// skipped. Malformed nested blocks bind nothing for their key.
pub fn parse_block(content: &str) -> HashMap<String, ConfigValue> {
    let lines: Vec<&str> = content.lines().collect();
    let mut config = HashMap::new();

    let mut i = 0;
    // Leftover text from a nested block's close line, reprocessed as if it
    // were the next line of this block.
    let mut pending: Option<String> = None;
    loop {
        let owned;
        let line = if let Some(p) = pending.take() {
            owned = p;
            owned.trim()
        } else if let Some(l) = lines.get(i) {
            i += 1;
            l.trim()
        } else {
            break;
        };

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            continue;
        };
        let key = strip_quotes(raw_key.trim());
        if key.is_empty() {
            continue;
        }
        let value = raw_value.trim();

        if value.starts_with('{') {
            // Nested block: collect until the matching close, which may sit
            // several lines down or share its line with other tokens.
            let rest = lines.get(i..).unwrap_or_default();
            if let Some((inner, consumed, tail)) = collect_nested(value, rest) {
                i += consumed;
                let nested = parse_block(&inner);
                config.insert(key.to_string(), ConfigValue::Map(nested));
                if !tail.trim().is_empty() {
                    pending = Some(tail);
                }
            } else {
                // Close never found inside this block body; skip the rest.
                i = lines.len();
            }
        } else if !value.is_empty() {
            config.insert(key.to_string(), ConfigValue::Scalar(strip_quotes(value).to_string()));
        }
    }

    config
}

/// Collect the interior of a nested block.
///
/// `first` is the remainder of the assignment line starting at the opening
/// `{`; `rest` are the following lines of the enclosing block body. Depth is
/// adjusted for every brace seen, so same-line opens and closes are handled.
/// Returns the interior text, how many of `rest`'s lines were consumed, and
/// whatever followed the matching close on its line (still the enclosing
/// block's content), or `None` if the block never closes.
fn collect_nested(first: &str, rest: &[&str]) -> Option<(String, usize, String)> {
    let mut depth: i32 = 0;
    let mut inner = String::new();

    for (used, line) in std::iter::once(first).chain(rest.iter().copied()).enumerate() {
        for (pos, ch) in line.char_indices() {
            match ch {
                '{' => {
                    depth += 1;
                    if depth == 1 {
                        // The outer opening brace is not content.
                        continue;
                    }
                }
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        let tail = line.get(pos + 1..).unwrap_or_default().to_string();
                        return Some((inner, used, tail));
                    }
                }
                _ => {}
            }
            if depth >= 1 {
                inner.push(ch);
            }
        }
        if depth >= 1 {
            inner.push('\n');
        }
    }

    None
}

/// Strip one matching pair of surrounding quotes and trim whitespace.
pub fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    for quote in ['"', '\''] {
        if let Some(stripped) = s.strip_prefix(quote).and_then(|t| t.strip_suffix(quote)) {
            return stripped.trim();
        }
    }
    s
}
