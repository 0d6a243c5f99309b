//! Request and response types for model generation.

use crate::{Message, Output};
use serde::{Deserialize, Serialize};
use storyboard_error::{BuilderError, BuilderErrorKind};

/// How the model should shape its answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Free text
    #[default]
    Text,
    /// JSON constrained by a response schema
    Json {
        /// Schema in the provider's dialect
        schema: serde_json::Value,
    },
}

/// Provider-neutral generation request.
///
/// # Examples
///
/// ```
/// use storyboard_core::{GenerateRequest, Message, ResponseFormat};
///
/// let request = GenerateRequest::builder()
///     .system_instruction("You are a storyboard director.")
///     .messages(vec![Message::user("场景：迷雾森林。")])
///     .thinking_budget(16000u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(*request.thinking_budget(), Some(16000));
/// assert_eq!(*request.response_format(), ResponseFormat::Text);
/// assert!(request.model().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(
    setter(into, strip_option),
    default,
    build_fn(private, name = "build_internal")
)]
pub struct GenerateRequest {
    /// Fixed instruction placed ahead of the conversation
    system_instruction: Option<String>,
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Requested response shape
    response_format: ResponseFormat,
    /// Reasoning token budget
    thinking_budget: Option<u32>,
    /// Sampling temperature
    temperature: Option<f32>,
    /// Model override; the driver's configured model when `None`
    model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

impl GenerateRequestBuilder {
    /// Build the request.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError`] if the builder rejects the assembled value.
    pub fn build(&self) -> Result<GenerateRequest, BuilderError> {
        self.build_internal().map_err(|e| {
            BuilderError::new(match e {
                GenerateRequestBuilderError::UninitializedField(field) => {
                    BuilderErrorKind::MissingField(field.to_string())
                }
                GenerateRequestBuilderError::ValidationError(message) => {
                    BuilderErrorKind::ValidationFailed(message)
                }
            })
        })
    }
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens spent on reasoning
    pub thinking_tokens: u32,
    /// Tokens in the answer
    pub output_tokens: u32,
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use storyboard_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("{}".to_string())],
///     usage: None,
/// };
/// assert_eq!(response.text(), "{}");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
    /// Token accounting, when the provider reports it
    pub usage: Option<TokenUsage>,
}

impl GenerateResponse {
    /// All outputs concatenated as text.
    pub fn text(&self) -> String {
        self.outputs.iter().map(Output::as_text).collect()
    }
}
