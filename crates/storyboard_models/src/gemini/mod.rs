//! Google Gemini integration over the REST API.

mod client;
mod conversion;
mod dto;

pub use client::GeminiClient;
pub use conversion::{error_message, from_gemini_response, to_gemini_request};
pub use dto::{
    GeminiCandidate, GeminiContent, GeminiErrorBody, GeminiErrorEnvelope, GeminiPart,
    GeminiRequest, GeminiResponse, GenerationConfig, PromptFeedback, ThinkingConfig,
    UsageMetadata,
};
