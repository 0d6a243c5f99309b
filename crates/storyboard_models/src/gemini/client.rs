//! Google Gemini REST client.

use super::conversion::{error_message, from_gemini_response, to_gemini_request};
use super::dto::GeminiResponse;
use crate::GeminiConfig;
use async_trait::async_trait;
use reqwest::Client;
use storyboard_core::{GenerateRequest, GenerateResponse};
use storyboard_error::{
    GeminiError, GeminiErrorKind, HttpError, HttpErrorKind, JsonError, StoryboardError,
    StoryboardResult,
};
use storyboard_interface::StoryboardDriver;
use tracing::{debug, instrument, warn};

/// Client for the Gemini `generateContent` endpoint.
///
/// One request per call; no retries, no streaming. The API key is looked up
/// when the client is built, but a missing key only fails the call, so it
/// reaches the caller the same way any other provider failure does.
///
/// # Examples
///
/// ```no_run
/// use storyboard_models::{GeminiClient, StoryboardConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoryboardConfig::load()?;
/// let client = GeminiClient::new(config.gemini())?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    api_key_env: String,
    endpoint: String,
    model: String,
    thinking_budget: Option<u32>,
    temperature: Option<f32>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key_env", &self.api_key_env)
            .field("has_api_key", &self.api_key.is_some())
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("thinking_budget", &self.thinking_budget)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Creates a client, reading the API key from the configured environment variable.
    ///
    /// An unset or blank variable is not an error here; every
    /// [`generate`](StoryboardDriver::generate) then fails with
    /// [`GeminiErrorKind::MissingApiKey`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(model = %config.model()))]
    pub fn new(config: &GeminiConfig) -> StoryboardResult<Self> {
        let api_key = std::env::var(config.api_key_env())
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            debug!(var = %config.api_key_env(), "API key not set");
        }

        Self::build(config, api_key)
    }

    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(model = %config.model()))]
    pub fn with_api_key(config: &GeminiConfig, api_key: impl Into<String>) -> StoryboardResult<Self> {
        Self::build(config, Some(api_key.into()))
    }

    fn build(config: &GeminiConfig, api_key: Option<String>) -> StoryboardResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            api_key,
            api_key_env: config.api_key_env().clone(),
            endpoint: config.endpoint().trim_end_matches('/').to_string(),
            model: config.model().clone(),
            thinking_budget: *config.thinking_budget(),
            temperature: *config.temperature(),
        })
    }

    fn url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, model)
    }
}

#[async_trait]
impl StoryboardDriver for GeminiClient {
    #[instrument(skip(self, req), fields(provider = "gemini"))]
    async fn generate(&self, req: &GenerateRequest) -> StoryboardResult<GenerateResponse> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GeminiError::new(GeminiErrorKind::MissingApiKey(self.api_key_env.clone()))
        })?;

        let model = req.model().as_deref().unwrap_or(self.model.as_str());
        let body = to_gemini_request(req, self.thinking_budget, self.temperature);
        let url = self.url(model);
        debug!(url = %url, model, "Sending Gemini generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| HttpError::new(HttpErrorKind::Send(e.to_string())))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| HttpError::new(HttpErrorKind::Body(e.to_string())))?;

        if !status.is_success() {
            let status_code = status.as_u16();
            let message = error_message(status_code, &text);
            warn!(status_code, message = %message, "Gemini returned an error status");
            return Err(GeminiError::new(GeminiErrorKind::HttpStatus {
                status_code,
                message,
            })
            .into());
        }

        let parsed: GeminiResponse = serde_json::from_str(&text).map_err(|e| {
            StoryboardError::from(JsonError::new(format!(
                "Failed to parse Gemini response: {}",
                e
            )))
        })?;

        let generated = from_gemini_response(parsed)?;
        if let Some(usage) = generated.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                thinking_tokens = usage.thinking_tokens,
                output_tokens = usage.output_tokens,
                "Gemini response received"
            );
        }
        Ok(generated)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
