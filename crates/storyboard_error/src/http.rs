//! Transport-level error types.

/// Where the exchange with the provider broke down.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HttpErrorKind {
    /// The request never produced a response (DNS, TLS, connect, timeout)
    #[display("request not sent: {}", _0)]
    Send(String),
    /// A response arrived but its body could not be read
    #[display("response body unreadable: {}", _0)]
    Body(String),
}

impl HttpErrorKind {
    /// The underlying transport message, without the stage prefix.
    pub fn message(&self) -> &str {
        match self {
            HttpErrorKind::Send(message) | HttpErrorKind::Body(message) => message,
        }
    }
}

/// Failure to complete the HTTP exchange at all.
///
/// A response that arrived with a non-2xx status is not an `HttpError`; it is
/// reported as [`GeminiErrorKind::HttpStatus`](crate::GeminiErrorKind::HttpStatus).
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", kind, line, file)]
pub struct HttpError {
    /// Stage and message
    pub kind: HttpErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_error::{HttpError, HttpErrorKind};
    ///
    /// let err = HttpError::new(HttpErrorKind::Send("connection refused".into()));
    /// assert_eq!(err.kind.message(), "connection refused");
    /// assert!(err.to_string().starts_with("HTTP Error: request not sent"));
    /// ```
    #[track_caller]
    pub fn new(kind: HttpErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
