//! CLI tool for plotview - parses page source files and outputs JSON
//!
//! Usage:
//!   plotview_cli <p1.txt> [p2.txt ...]              # Output JSON to stdout
//!   plotview_cli <p1.txt> [p2.txt ...] -o out.json  # Output JSON to file

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use plotview::parser::parse_plot;

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let output_path = match args.iter().position(|a| a == "-o") {
        Some(pos) if pos + 1 < args.len() => {
            let path = args.remove(pos + 1);
            args.remove(pos);
            Some(path)
        }
        Some(_) => {
            eprintln!("Usage: plotview_cli <page.txt>... [-o output.json]");
            std::process::exit(1);
        }
        None => None,
    };

    if args.is_empty() {
        eprintln!("Usage: plotview_cli <page.txt>... [-o output.json]");
        std::process::exit(1);
    }

    // Read page sources; unreadable files become missing pages
    let sources: Vec<Option<String>> = args
        .iter()
        .map(|path| match fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(e) => {
                eprintln!("Warning: skipping {}: {}", path, e);
                None
            }
        })
        .collect();
    let borrowed: Vec<Option<&str>> = sources.iter().map(Option::as_deref).collect();

    // Parse the plot
    let plot = match parse_plot(&borrowed) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error parsing plot: {}", e);
            std::process::exit(1);
        }
    };

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&plot) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(json.as_bytes()).unwrap();
            handle.write_all(b"\n").unwrap();
        }
    }
}
