//! Page description parser tests
//!
//! Tests for element tag recognition, config block binding, nested blocks
//! spanning multiple lines, and plot assembly with missing pages.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use test_case::test_case;

use plotview::error::PlotviewError;
use plotview::parser::{parse_page, parse_plot};
use plotview::types::{ConfigValue, ElementKind};

#[test_case("<txt>{intro}</txt>", ElementKind::Text, "intro"; "text tag")]
#[test_case("<pic>{cover}</pic>", ElementKind::Image, "cover"; "image tag")]
#[test_case("<inputbox>{riddle}</inputbox>", ElementKind::Puzzle, "riddle"; "puzzle tag")]
#[test_case("  <txt>{padded}</txt>  ", ElementKind::Text, "padded"; "surrounding whitespace")]
fn test_element_declarations(line: &str, kind: ElementKind, name: &str) {
    let page = parse_page(line, 0).unwrap();
    assert_eq!(page.elements.len(), 1);
    assert_eq!(page.elements[0].kind, kind);
    assert_eq!(page.elements[0].variable_name, name);
}

#[test_case("<txt>intro</txt>"; "missing braces")]
#[test_case("<txt>{intro}</pic>"; "mismatched close tag")]
#[test_case("<video>{x}</video>"; "unknown tag")]
#[test_case("txt>{intro}</txt>"; "missing open angle")]
fn test_malformed_declarations_skipped(line: &str) {
    let page = parse_page(line, 0).unwrap();
    assert!(page.elements.is_empty());
}

#[test]
fn test_parsing_is_deterministic() {
    let raw = "<txt>{a}</txt>\n<inputbox>{q}</inputbox>\n{\na = \"hello\"\nq = {\nanswer = \"42\"\n}\n}\n";
    let first = parse_page(raw, 5).unwrap();
    let second = parse_page(raw, 5).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_has_puzzle_iff_puzzle_element() {
    let without = parse_page("<txt>{a}</txt>\n<pic>{b}</pic>\n", 0).unwrap();
    assert!(!without.has_puzzle);
    assert!(without.puzzle().is_none());

    let with = parse_page("<txt>{a}</txt>\n<inputbox>{q}</inputbox>\n", 0).unwrap();
    assert!(with.has_puzzle);
    assert_eq!(with.puzzle().unwrap().variable_name, "q");
}

#[test]
fn test_inputbox_nested_config_end_to_end() {
    // The exact shape from the page source format: a puzzle declaration
    // whose variable binds a nested block spanning several lines.
    let raw = "<inputbox>{q}</inputbox>\n{\nq = {\nanswer = \"x\"\nhint = \"y\"\n}\n}";
    let page = parse_page(raw, 0).unwrap();

    assert_eq!(page.elements.len(), 1);
    assert_eq!(page.elements[0].kind, ElementKind::Puzzle);
    let content = page.elements[0].content.as_ref().unwrap();
    assert_eq!(content.get_str("answer"), Some("x"));
    assert_eq!(content.get_str("hint"), Some("y"));
}

#[test]
fn test_nested_block_braces_share_lines() {
    // Opening brace on the assignment line, closing brace sharing a line
    // with the last assignment.
    let raw = "<inputbox>{q}</inputbox>\n{\nq = { answer = \"a\"\nhint = \"b\" }\n}\n";
    let page = parse_page(raw, 0).unwrap();
    let content = page.elements[0].content.as_ref().unwrap();
    assert_eq!(content.get_str("answer"), Some("a"));
    assert_eq!(content.get_str("hint"), Some("b"));
}

#[test]
fn test_nested_close_line_keeps_outer_assignment() {
    // A nested block's closing brace sharing its line with a further outer
    // assignment must not swallow that assignment.
    let raw = "<txt>{mood}</txt>\n<inputbox>{q}</inputbox>\n{\nq = {\nanswer = \"x\"\n} mood = dark\n}\n";
    let page = parse_page(raw, 0).unwrap();

    let riddle = page.puzzle().unwrap().content.as_ref().unwrap();
    assert_eq!(riddle.get_str("answer"), Some("x"));
    assert_eq!(page.elements[0].content, Some(ConfigValue::from("dark")));
}

#[test]
fn test_scalar_quote_stripping() {
    let raw = "<txt>{a}</txt>\n<txt>{b}</txt>\n<txt>{c}</txt>\n{\na = \"double\"\nb = 'single'\nc = bare words\n}\n";
    let page = parse_page(raw, 0).unwrap();
    assert_eq!(page.elements[0].content, Some(ConfigValue::from("double")));
    assert_eq!(page.elements[1].content, Some(ConfigValue::from("single")));
    assert_eq!(page.elements[2].content, Some(ConfigValue::from("bare words")));
}

#[test]
fn test_chinese_keys_and_values() {
    let raw = "<inputbox>{谜题}</inputbox>\n{\n谜题 = {\n谜底 = \"月亮\"\n错误提示文案 = \"再想想\"\n}\n}\n";
    let page = parse_page(raw, 0).unwrap();
    let content = page.elements[0].content.as_ref().unwrap();
    assert_eq!(content.get_str("谜底"), Some("月亮"));
    assert_eq!(content.get_str("错误提示文案"), Some("再想想"));
}

#[test]
fn test_unterminated_block_is_hard_error() {
    let raw = "<txt>{a}</txt>\n{\na = \"x\"\n";
    match parse_page(raw, 0) {
        Err(PlotviewError::UnterminatedBlock { line }) => assert_eq!(line, 2),
        other => panic!("expected UnterminatedBlock, got {other:?}"),
    }
}

#[test]
fn test_unterminated_nested_block_is_hard_error() {
    // The outer close gets consumed by the dangling nested block.
    let raw = "<inputbox>{q}</inputbox>\n{\nq = {\nanswer = \"x\"\n}\n";
    assert!(matches!(
        parse_page(raw, 0),
        Err(PlotviewError::UnterminatedBlock { .. })
    ));
}

#[test]
fn test_multiple_config_blocks_merge() {
    let raw = "<txt>{a}</txt>\n<txt>{b}</txt>\n{\na = \"first\"\n}\n{\nb = \"second\"\n}\n";
    let page = parse_page(raw, 0).unwrap();
    assert_eq!(page.elements[0].content, Some(ConfigValue::from("first")));
    assert_eq!(page.elements[1].content, Some(ConfigValue::from("second")));
}

#[test]
fn test_plot_skips_missing_and_reindexes() {
    let p = "<txt>{t}</txt>\n";
    let plot = parse_plot(&[Some(p), None, Some(p), Some("{\nbroken\n")]).unwrap();

    assert_eq!(plot.pages.len(), 2);
    assert!(plot.is_partial());
    assert_eq!(plot.missing, vec![1, 3]);
    // Surviving pages are contiguous.
    assert_eq!(plot.pages[0].index, 0);
    assert_eq!(plot.pages[1].index, 1);
}

#[test]
fn test_empty_plot_is_distinct_error() {
    assert!(matches!(
        parse_plot(&[None, None]),
        Err(PlotviewError::EmptyPlot)
    ));
    assert!(matches!(parse_plot(&[]), Err(PlotviewError::EmptyPlot)));
}

#[test]
fn test_full_page_source() {
    let raw = "\
<txt>{opening}</txt>
<pic>{scene}</pic>
<inputbox>{riddle}</inputbox>
{
opening = \"plot/opening.txt\"
scene = \"plot/scene.png\"
riddle = {
answer = \"42\"
errorMessage = \"try again\"
}
}
";
    let page = parse_page(raw, 2).unwrap();
    assert_eq!(page.index, 2);
    assert_eq!(page.elements.len(), 3);
    assert!(page.has_puzzle);
    assert_eq!(
        page.elements[0].content,
        Some(ConfigValue::from("plot/opening.txt"))
    );
    let riddle = page.puzzle().unwrap().content.as_ref().unwrap();
    assert_eq!(riddle.get_str("answer"), Some("42"));
    assert_eq!(riddle.get_str("errorMessage"), Some("try again"));
}
