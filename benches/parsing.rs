//! Benchmarks for page source parsing performance.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plotview::parser::parse_page;

/// Benchmark parsing of a small text-only page
fn bench_text_page(c: &mut Criterion) {
    let raw = "<txt>{intro}</txt>\n<pic>{cover}</pic>\n{\nintro = \"plot/intro.txt\"\ncover = \"plot/cover.png\"\n}\n";

    c.bench_function("parse_text_page", |b| {
        b.iter(|| parse_page(black_box(raw), 0).expect("Failed to parse"))
    });
}

/// Benchmark parsing of a puzzle page with a nested config block
fn bench_puzzle_page(c: &mut Criterion) {
    let raw = "<txt>{story}</txt>\n<inputbox>{riddle}</inputbox>\n{\nstory = \"plot/story.txt\"\nriddle = {\nanswer = \"42\"\nerrorMessage = \"try again\"\n}\n}\n";

    c.bench_function("parse_puzzle_page", |b| {
        b.iter(|| parse_page(black_box(raw), 0).expect("Failed to parse"))
    });
}

/// Benchmark parsing of a large synthetic page (many elements and keys)
fn bench_large_page(c: &mut Criterion) {
    let mut raw = String::new();
    for i in 0..200 {
        raw.push_str(&format!("<txt>{{t{i}}}</txt>\n"));
    }
    raw.push_str("{\n");
    for i in 0..200 {
        raw.push_str(&format!("t{i} = \"paragraph number {i}\"\n"));
    }
    raw.push_str("}\n");

    c.bench_function("parse_large_page", |b| {
        b.iter(|| parse_page(black_box(&raw), 0).expect("Failed to parse"))
    });
}

criterion_group!(benches, bench_text_page, bench_puzzle_page, bench_large_page);
criterion_main!(benches);
