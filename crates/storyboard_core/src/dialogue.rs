//! Spoken line of a beat.

use serde::{Deserialize, Serialize};

/// Marker the model writes when a beat has no spoken line.
pub const NO_DIALOGUE: &str = "无";

/// The dialogue of one grid.
///
/// The field is always present on the wire. The model writes [`NO_DIALOGUE`]
/// for silent beats; that sentinel is a domain value, distinct from a missing
/// field (which fails to parse) and from an empty line.
///
/// # Examples
///
/// ```
/// use storyboard_core::Dialogue;
///
/// let silent: Dialogue = serde_json::from_str("\"无\"").unwrap();
/// assert_eq!(silent, Dialogue::Silent);
/// assert_eq!(silent.spoken(), None);
///
/// let line: Dialogue = serde_json::from_str("\"别怕，我在。\"").unwrap();
/// assert_eq!(line.spoken(), Some("别怕，我在。"));
/// assert_eq!(serde_json::to_string(&silent).unwrap(), "\"无\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(from = "String", into = "String")]
pub enum Dialogue {
    /// A spoken line, verbatim
    #[display("{}", _0)]
    Line(String),
    /// The beat has no dialogue
    #[display("无")]
    Silent,
}

impl Dialogue {
    /// The line to voice, or `None` for silent beats and blank lines.
    pub fn spoken(&self) -> Option<&str> {
        match self {
            Dialogue::Line(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }
}

impl From<String> for Dialogue {
    fn from(value: String) -> Self {
        if value.trim() == NO_DIALOGUE {
            Dialogue::Silent
        } else {
            Dialogue::Line(value)
        }
    }
}

impl From<Dialogue> for String {
    fn from(value: Dialogue) -> Self {
        match value {
            Dialogue::Line(text) => text,
            Dialogue::Silent => NO_DIALOGUE.to_string(),
        }
    }
}
