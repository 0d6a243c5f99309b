//! Normalized failure of one storyboard generation call.
//!
//! Whatever went wrong between composing the request and decoding the
//! episode, the generation client reports exactly one of these.

/// Why a generation call failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Credential missing from the environment
    #[display("{} is not set; cannot authenticate with the provider", _0)]
    MissingApiKey(String),
    /// The provider could not be reached
    #[display("{}", _0)]
    Transport(String),
    /// The provider answered with a non-2xx status
    #[display("Provider returned HTTP {}: {}", status_code, message)]
    Provider {
        /// HTTP status code
        status_code: u16,
        /// Provider's explanation
        message: String,
    },
    /// The provider refused the request without a status (safety block, etc.)
    #[display("Provider rejected the request: {}", _0)]
    Rejected(String),
    /// The provider returned no text to decode
    #[display("Provider returned an empty storyboard response")]
    EmptyResponse,
    /// The payload does not have the episode shape
    #[display("Storyboard payload does not match the episode schema: {}", _0)]
    Parse(String),
    /// The payload decoded but holds no shot groups
    #[display("Storyboard payload contains no shot groups")]
    EmptyEpisode,
    /// The request could not be assembled
    #[display("Failed to assemble generation request: {}", _0)]
    Request(String),
}

/// Generation failure with source location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyEpisode);
/// assert_eq!(err.user_message(), "Storyboard payload contains no shot groups");
/// assert!(format!("{}", err).contains("at line"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific failure
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
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
