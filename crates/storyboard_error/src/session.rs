//! Session controller error types.

/// Operations the session controller refuses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SessionErrorKind {
    /// Script is empty or whitespace-only
    #[display("请输入剧本内容后再启动预演。")]
    EmptyScript,
    /// A generation is already running
    #[display("A storyboard generation is already in progress")]
    GenerationInFlight,
    /// The operation needs an episode and none is present
    #[display("No storyboard episode is present")]
    NoEpisode,
    /// Navigation target is not a group of the current episode
    #[display("Shot group {} does not exist in the current episode", _0)]
    UnknownGroup(u32),
}

/// Session error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{SessionError, SessionErrorKind};
///
/// let err = SessionError::new(SessionErrorKind::UnknownGroup(42));
/// assert!(format!("{}", err).contains("42"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The specific condition
    pub kind: SessionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SessionError {
    /// Create a new SessionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The human-readable message shown to the user, without location details.
    pub fn user_message(&self) -> String {
        self.kind.to_string()
    }
}
