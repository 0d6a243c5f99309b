//! Gemini provider error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key environment variable not set
    #[display("{} environment variable not set", _0)]
    MissingApiKey(String),
    /// Failed to build the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Non-2xx response with status code and the provider's message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Error message from the response body, or the raw body
        message: String,
    },
    /// Prompt or candidate blocked by the provider's safety filters
    #[display("Request blocked by provider: {}", _0)]
    Blocked(String),
    /// Response carried no candidate text
    #[display("Gemini response contained no text candidates")]
    EmptyCandidates,
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey("GEMINI_API_KEY".into()));
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
