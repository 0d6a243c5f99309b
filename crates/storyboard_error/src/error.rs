//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, GeminiError, GenerationError, HttpError, JsonError, SessionError,
};

/// Every error condition the workspace can produce.
///
/// # Examples
///
/// ```
/// use storyboard_error::{GeminiError, GeminiErrorKind, StoryboardError, StoryboardErrorKind};
///
/// let blocked = GeminiError::new(GeminiErrorKind::Blocked("SAFETY".into()));
/// let err: StoryboardError = blocked.into();
/// assert!(matches!(err.kind(), StoryboardErrorKind::Gemini(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryboardErrorKind {
    /// Transport failure
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Gemini provider error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Normalized generation failure
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Session controller refusal
    #[from(SessionError)]
    Session(SessionError),
}

/// Storyboard error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyboard_error::{ConfigError, ConfigErrorKind, StoryboardResult};
///
/// fn might_fail() -> StoryboardResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::Invalid("missing field `gemini`".into())))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyboard Error: {}", _0)]
pub struct StoryboardError(Box<StoryboardErrorKind>);

impl StoryboardError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryboardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryboardErrorKind {
        &self.0
    }
}

impl<T> From<T> for StoryboardError
where
    T: Into<StoryboardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for storyboard operations.
pub type StoryboardResult<T> = std::result::Result<T, StoryboardError>;
