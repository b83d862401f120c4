//! Input/output types for the normalizer (JSON contract with Node).

use serde::{Deserialize, Serialize};

/// Input: one JSON object per stdin line (matches the form binding payload).
/// A missing or null value means the field is unset. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Input {
  #[serde(default)]
  pub value: Option<String>,
}

/// Output: one JSON object per stdout line for Node to render into the input.
#[derive(Debug, Serialize)]
pub struct Output {
  pub value: String,
}

/// Emitted in-band when a stdin line is not a valid Input object.
#[derive(Debug, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}
