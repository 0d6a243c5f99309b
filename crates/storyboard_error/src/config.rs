//! Configuration error types.

/// Which step of layered loading failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A source file could not be read or is not valid TOML
    #[display("Failed to load configuration sources: {}", _0)]
    Sources(String),
    /// The merged layers do not deserialize into the settings struct
    #[display("Invalid configuration: {}", _0)]
    Invalid(String),
}

/// Layered configuration could not be built or deserialized.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// What went wrong
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_error::{ConfigError, ConfigErrorKind};
    ///
    /// let err = ConfigError::new(ConfigErrorKind::Invalid(
    ///     "invalid type for `thinking_budget`".into(),
    /// ));
    /// assert!(err.kind.to_string().contains("thinking_budget"));
    /// ```
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
