//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is an Input ({"value": ...}). Each non-blank line produces
//! exactly one output line, in input order:
//! - An Output with the normalized value
//! - An ErrorOutput when the line is not valid JSON for the Input shape
//!
//! Malformed *dates* are not errors; they pass through the normalizer unchanged.

use date_input::{run, ErrorOutput, Input};
use std::io::{self, BufRead, Write};

fn main() {
  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "date-input: read error: {}", e);
        std::process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    match serde_json::from_str::<Input>(trimmed) {
      Ok(input) => {
        let _ = serde_json::to_writer(&mut out, &run(&input));
        let _ = writeln!(out);
      }
      Err(e) => {
        let err = ErrorOutput::new(format!("json parse: {}", e));
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
      }
    }
  }

  let _ = out.flush();
}
