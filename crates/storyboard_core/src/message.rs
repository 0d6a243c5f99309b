//! Message types for conversation content.

use crate::Role;
use serde::{Deserialize, Serialize};

/// One turn of conversation.
///
/// # Examples
///
/// ```
/// use storyboard_core::{Message, Role};
///
/// let message = Message::user("剧本正文");
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.text, "剧本正文");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// Message text
    pub text: String,
}

impl Message {
    /// A user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }
}
