//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Who authored a message.
///
/// System text travels separately as the request's system instruction, and
/// every call is a single user turn.
///
/// # Examples
///
/// ```
/// use storyboard_core::Role;
///
/// assert_eq!(format!("{}", Role::User), "User");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// Text written by the person asking
    User,
}
