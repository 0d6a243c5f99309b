//! The storyboard generation call.

use crate::{DirectorPrompt, Script, extract_json};
use storyboard_core::{
    Episode, GenerateRequest, Message, ResponseFormat, contract_report, episode_schema,
};
use storyboard_error::{
    GeminiErrorKind, GenerationError, GenerationErrorKind, StoryboardError, StoryboardErrorKind,
};
use storyboard_interface::StoryboardDriver;
use tracing::{debug, info, instrument, warn};

/// Reasoning budget requested when none is configured.
pub const DEFAULT_THINKING_BUDGET: u32 = 16000;

/// Turns a script into an [`Episode`] with exactly one driver call.
///
/// Every failure between composing the request and decoding the episode comes
/// back as one [`GenerationError`]. A partially decoded episode is never
/// returned.
#[derive(Debug, Clone)]
pub struct StoryboardGenerator<D> {
    driver: D,
    thinking_budget: u32,
    model: Option<String>,
}

impl<D: StoryboardDriver> StoryboardGenerator<D> {
    /// Wrap a driver with the default thinking budget and the driver's own model.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            thinking_budget: DEFAULT_THINKING_BUDGET,
            model: None,
        }
    }

    /// Override the reasoning token budget.
    pub fn with_thinking_budget(mut self, thinking_budget: u32) -> Self {
        self.thinking_budget = thinking_budget;
        self
    }

    /// Request a specific model instead of the driver's default.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Assemble the request for `script` without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::Request`] if the builder rejects the request.
    pub fn request(&self, script: &Script) -> Result<GenerateRequest, GenerationError> {
        let prompt = DirectorPrompt::compose(script);
        let mut builder = GenerateRequest::builder();
        builder
            .system_instruction(prompt.system)
            .messages(vec![Message::user(prompt.user)])
            .response_format(ResponseFormat::Json {
                schema: episode_schema(),
            })
            .thinking_budget(self.thinking_budget);
        if let Some(model) = &self.model {
            builder.model(model.clone());
        }
        builder
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::Request(e.to_string())))
    }

    /// Generate an episode for `script`.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] for transport failures, provider errors,
    /// empty responses, and payloads that do not decode into an episode.
    #[instrument(
        skip_all,
        fields(
            provider = self.driver.provider_name(),
            model = self.model.as_deref().unwrap_or(self.driver.model_name()),
            script_chars = script.as_str().chars().count()
        )
    )]
    pub async fn generate(&self, script: &Script) -> Result<Episode, GenerationError> {
        let request = self.request(script)?;
        debug!("Requesting storyboard");

        let response = self.driver.generate(&request).await.map_err(|e| {
            let err = classify(e);
            warn!(error = %err.kind, "Storyboard generation failed");
            err
        })?;

        let episode = decode_episode(&response.text())?;
        info!(groups = episode.groups.len(), "Storyboard generated");
        Ok(episode)
    }
}

/// Decode model output into an episode.
///
/// Soft-contract departures are logged and tolerated; a missing required
/// field, malformed JSON, or an episode without groups is an error.
///
/// # Errors
///
/// Returns [`GenerationErrorKind::EmptyResponse`], [`GenerationErrorKind::Parse`]
/// or [`GenerationErrorKind::EmptyEpisode`].
pub fn decode_episode(text: &str) -> Result<Episode, GenerationError> {
    if text.trim().is_empty() {
        return Err(GenerationError::new(GenerationErrorKind::EmptyResponse));
    }

    let payload = extract_json(text).ok_or_else(|| {
        GenerationError::new(GenerationErrorKind::Parse(
            "response contains no JSON object".to_string(),
        ))
    })?;

    let episode: Episode = serde_json::from_str(&payload)
        .map_err(|e| GenerationError::new(GenerationErrorKind::Parse(e.to_string())))?;

    if episode.groups.is_empty() {
        return Err(GenerationError::new(GenerationErrorKind::EmptyEpisode));
    }

    for violation in contract_report(&episode) {
        warn!(%violation, "Episode departs from the requested shot contract");
    }

    Ok(episode)
}

/// Normalize any driver failure into a [`GenerationError`].
pub fn classify(err: StoryboardError) -> GenerationError {
    let kind = match err.kind() {
        StoryboardErrorKind::Http(e) => GenerationErrorKind::Transport(e.kind.message().to_string()),
        StoryboardErrorKind::Json(e) => GenerationErrorKind::Parse(e.message.clone()),
        StoryboardErrorKind::Gemini(e) => match &e.kind {
            GeminiErrorKind::MissingApiKey(var) => GenerationErrorKind::MissingApiKey(var.clone()),
            GeminiErrorKind::ClientCreation(msg) => GenerationErrorKind::Transport(msg.clone()),
            GeminiErrorKind::HttpStatus {
                status_code,
                message,
            } => GenerationErrorKind::Provider {
                status_code: *status_code,
                message: message.clone(),
            },
            GeminiErrorKind::Blocked(reason) => GenerationErrorKind::Rejected(reason.clone()),
            GeminiErrorKind::EmptyCandidates => GenerationErrorKind::EmptyResponse,
        },
        StoryboardErrorKind::Generation(e) => return e.clone(),
        StoryboardErrorKind::Builder(e) => GenerationErrorKind::Request(e.to_string()),
        StoryboardErrorKind::Config(e) => GenerationErrorKind::Request(e.kind.to_string()),
        StoryboardErrorKind::Session(e) => GenerationErrorKind::Request(e.user_message()),
    };
    GenerationError::new(kind)
}
