//! Gemini REST API data transfer objects.
//!
//! Only the parts of `generateContent` the storyboard call uses are modelled.
//! Unknown response fields are ignored.

use serde::{Deserialize, Serialize};

/// Body of a `models/{model}:generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Fixed instruction placed ahead of the conversation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
    /// Conversation turns
    pub contents: Vec<GeminiContent>,
    /// Output controls
    pub generation_config: GenerationConfig,
}

/// A turn, or the system instruction when `role` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiContent {
    /// "user" or "model"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// One text part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiPart {
    /// Part text
    #[serde(default)]
    pub text: String,
    /// Set on reasoning summaries, which are not part of the answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

impl GeminiPart {
    /// A plain text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            thought: None,
        }
    }

    /// Whether this part is reasoning rather than answer text.
    pub fn is_thought(&self) -> bool {
        self.thought.unwrap_or(false)
    }
}

/// Output controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// MIME type of the answer, "application/json" for schema-constrained output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Schema the answer must satisfy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    /// Reasoning controls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Reasoning controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    /// Reasoning token budget
    pub thinking_budget: u32,
}

/// Successful `generateContent` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    /// Candidate answers; the first is used
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    /// Present when the prompt itself was blocked
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    /// Token accounting
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

/// One candidate answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    /// Answer content
    #[serde(default)]
    pub content: Option<GeminiContent>,
    /// Why generation stopped ("STOP", "SAFETY", ...)
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Prompt-level safety feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Token accounting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_token_count: u32,
    /// Tokens in the answer
    #[serde(default)]
    pub candidates_token_count: u32,
    /// Tokens spent on reasoning
    #[serde(default)]
    pub thoughts_token_count: u32,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiErrorEnvelope {
    /// Error details
    pub error: GeminiErrorBody,
}

/// Error details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiErrorBody {
    /// HTTP status code
    #[serde(default)]
    pub code: Option<u16>,
    /// Human-readable explanation
    #[serde(default)]
    pub message: String,
    /// Canonical status ("INVALID_ARGUMENT", ...)
    #[serde(default)]
    pub status: Option<String>,
}
