//! Model provider integrations for storyboard generation.
//!
//! Provides the layered [`StoryboardConfig`] and the [`GeminiClient`], a
//! [`StoryboardDriver`](storyboard_interface::StoryboardDriver) that speaks
//! the Gemini REST API with schema-constrained JSON output.
//!
//! ```no_run
//! use storyboard_core::{GenerateRequest, Message};
//! use storyboard_interface::StoryboardDriver;
//! use storyboard_models::{GeminiClient, StoryboardConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoryboardConfig::load()?;
//! let client = GeminiClient::new(config.gemini())?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("你好")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod gemini;

pub use config::{GeminiConfig, StoryboardConfig};
pub use gemini::{
    GeminiCandidate, GeminiClient, GeminiContent, GeminiErrorBody, GeminiErrorEnvelope,
    GeminiPart, GeminiRequest, GeminiResponse, GenerationConfig, PromptFeedback, ThinkingConfig,
    UsageMetadata, error_message, from_gemini_response, to_gemini_request,
};
