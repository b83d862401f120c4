//! Date Input Normalizer — pure string slicing (V1); no date parsing, no DB, no network.
//! Used by the binary for stdin/stdout; can also be called as a library.

mod date;
mod types;

pub use date::format_date_input;
pub use types::{ErrorOutput, Input, Output};

/// Run the normalizer on parsed input and return the output (no I/O).
pub fn run(input: &Input) -> Output {
  Output {
    value: format_date_input(input.value.as_deref()),
  }
}
