//! Error types for the storyboard workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! [`GenerationError`] is the single failure the generation client reports;
//! [`SessionError`] covers operations the session controller refuses.
//!
//! # Examples
//!
//! ```
//! use storyboard_error::{HttpError, HttpErrorKind, StoryboardResult};
//!
//! fn fetch() -> StoryboardResult<String> {
//!     Err(HttpError::new(HttpErrorKind::Send("Connection refused".into())))?
//! }
//!
//! assert!(fetch().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod gemini;
mod generation;
mod http;
mod json;
mod session;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{StoryboardError, StoryboardErrorKind, StoryboardResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use http::{HttpError, HttpErrorKind};
pub use json::JsonError;
pub use session::{SessionError, SessionErrorKind};
