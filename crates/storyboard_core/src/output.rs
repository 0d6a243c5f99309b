//! Output types from model responses.

use serde::{Deserialize, Serialize};

/// One piece of model output.
///
/// Schema-constrained JSON still arrives as text; decoding it is the
/// caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),
}

impl Output {
    /// The output text.
    pub fn as_text(&self) -> &str {
        match self {
            Output::Text(text) => text,
        }
    }
}
