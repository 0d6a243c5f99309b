//! Conversion between provider-neutral requests and Gemini DTOs.

use super::dto::{
    GeminiContent, GeminiErrorEnvelope, GeminiPart, GeminiRequest, GeminiResponse,
    GenerationConfig, ThinkingConfig,
};
use storyboard_core::{GenerateRequest, GenerateResponse, Output, ResponseFormat, Role, TokenUsage};
use storyboard_error::{GeminiError, GeminiErrorKind};

/// Finish reasons that mean the answer was withheld.
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
];

/// Build the wire request.
///
/// Request-level settings win over the client defaults.
pub fn to_gemini_request(
    req: &GenerateRequest,
    default_thinking_budget: Option<u32>,
    default_temperature: Option<f32>,
) -> GeminiRequest {
    let system_instruction = req.system_instruction().as_ref().map(|text| GeminiContent {
        role: None,
        parts: vec![GeminiPart::text(text.as_str())],
    });

    let contents = req
        .messages()
        .iter()
        .map(|message| GeminiContent {
            role: Some(
                match message.role {
                    Role::User => "user",
                }
                .to_string(),
            ),
            parts: vec![GeminiPart::text(message.text.as_str())],
        })
        .collect();

    let (response_mime_type, response_schema) = match req.response_format() {
        ResponseFormat::Text => (None, None),
        ResponseFormat::Json { schema } => {
            (Some("application/json".to_string()), Some(schema.clone()))
        }
    };

    GeminiRequest {
        system_instruction,
        contents,
        generation_config: GenerationConfig {
            response_mime_type,
            response_schema,
            thinking_config: (*req.thinking_budget())
                .or(default_thinking_budget)
                .map(|thinking_budget| ThinkingConfig { thinking_budget }),
            temperature: (*req.temperature()).or(default_temperature),
        },
    }
}

/// Extract the answer text from a successful response.
///
/// Reasoning parts are skipped. A blocked prompt or a candidate withheld by
/// a safety filter is a [`GeminiErrorKind::Blocked`]; a response with no
/// answer text otherwise is [`GeminiErrorKind::EmptyCandidates`].
pub fn from_gemini_response(response: GeminiResponse) -> Result<GenerateResponse, GeminiError> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.clone())
    {
        return Err(GeminiError::new(GeminiErrorKind::Blocked(reason)));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyCandidates))?;

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|part| !part.is_thought())
                .map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(match candidate.finish_reason {
            Some(reason) if BLOCKING_FINISH_REASONS.contains(&reason.as_str()) => {
                GeminiError::new(GeminiErrorKind::Blocked(reason))
            }
            _ => GeminiError::new(GeminiErrorKind::EmptyCandidates),
        });
    }

    let usage = response.usage_metadata.map(|usage| TokenUsage {
        prompt_tokens: usage.prompt_token_count,
        thinking_tokens: usage.thoughts_token_count,
        output_tokens: usage.candidates_token_count,
    });

    Ok(GenerateResponse {
        outputs: vec![Output::Text(text)],
        usage,
    })
}

/// Best human-readable message for a non-2xx response body.
pub fn error_message(status_code: u16, body: &str) -> String {
    match serde_json::from_str::<GeminiErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.trim().is_empty() => {
            return envelope.error.message;
        }
        _ => {}
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status_code)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storyboard_core::Message;

    fn request() -> anyhow::Result<GenerateRequest> {
        Ok(GenerateRequest::builder()
            .system_instruction("导演协议")
            .messages(vec![Message::user("剧本")])
            .response_format(ResponseFormat::Json {
                schema: json!({ "type": "OBJECT" }),
            })
            .build()?)
    }

    #[test]
    fn request_carries_schema_and_thinking_budget() -> anyhow::Result<()> {
        let wire = to_gemini_request(&request()?, Some(16000), None);
        let value = serde_json::to_value(&wire)?;

        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "导演协议");
        assert!(value["systemInstruction"].get("role").is_none());
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "剧本");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
        assert_eq!(
            value["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            16000
        );
        assert!(value["generationConfig"].get("temperature").is_none());
        Ok(())
    }

    #[test]
    fn request_settings_override_client_defaults() -> anyhow::Result<()> {
        let req = GenerateRequest::builder()
            .messages(vec![Message::user("剧本")])
            .thinking_budget(1024u32)
            .temperature(0.5f32)
            .build()?;
        let wire = to_gemini_request(&req, Some(16000), Some(1.0));

        assert_eq!(
            wire.generation_config.thinking_config,
            Some(ThinkingConfig {
                thinking_budget: 1024
            })
        );
        assert_eq!(wire.generation_config.temperature, Some(0.5));
        assert_eq!(wire.generation_config.response_mime_type, None);
        Ok(())
    }

    #[test]
    fn response_text_skips_thought_parts() -> anyhow::Result<()> {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "planning the beats", "thought": true },
                        { "text": "{\"episodeNumber\":" },
                        { "text": "1}" }
                    ]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {
                "promptTokenCount": 10,
                "candidatesTokenCount": 5,
                "thoughtsTokenCount": 7
            }
        }))?;

        let generated = from_gemini_response(response)?;
        assert_eq!(generated.text(), "{\"episodeNumber\":1}");
        assert_eq!(generated.usage.map(|u| u.thinking_tokens), Some(7));
        Ok(())
    }

    #[test]
    fn blocked_prompt_is_reported() -> anyhow::Result<()> {
        let response: GeminiResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } }))?;

        let err = from_gemini_response(response).err();
        assert_eq!(
            err.map(|e| e.kind),
            Some(GeminiErrorKind::Blocked("SAFETY".to_string()))
        );
        Ok(())
    }

    #[test]
    fn empty_candidate_is_reported() -> anyhow::Result<()> {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [] }, "finishReason": "STOP" }]
        }))?;

        let err = from_gemini_response(response).err();
        assert_eq!(err.map(|e| e.kind), Some(GeminiErrorKind::EmptyCandidates));
        Ok(())
    }

    #[test]
    fn error_message_prefers_the_envelope() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(error_message(400, body), "API key not valid.");
        assert_eq!(error_message(502, "  bad gateway \n"), "bad gateway");
        assert_eq!(error_message(503, ""), "HTTP 503");
    }
}
