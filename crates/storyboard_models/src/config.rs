//! Layered configuration for the storyboard tool.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from storyboard.toml)
//! - `~/.config/storyboard/storyboard.toml`
//! - `./storyboard.toml`

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use storyboard_error::{ConfigError, ConfigErrorKind, StoryboardResult};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../storyboard.toml");

/// Settings for the Gemini provider.
///
/// # Examples
///
/// ```
/// use storyboard_models::StoryboardConfig;
///
/// let config = StoryboardConfig::bundled().unwrap();
/// let gemini = config.gemini().clone().with_model("gemini-2.5-flash".to_string());
/// assert_eq!(gemini.model(), "gemini-2.5-flash");
/// assert_eq!(*gemini.thinking_budget(), Some(16000));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct GeminiConfig {
    /// Model identifier
    model: String,
    /// Base URL of the REST API, without the `/models/...` suffix
    endpoint: String,
    /// Environment variable holding the API key
    api_key_env: String,
    /// Reasoning token budget
    #[serde(default)]
    thinking_budget: Option<u32>,
    /// Sampling temperature; the provider default when unset
    #[serde(default)]
    temperature: Option<f32>,
}

/// Top-level configuration.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct StoryboardConfig {
    /// Gemini provider settings
    gemini: GeminiConfig,
}

impl StoryboardConfig {
    /// The defaults shipped with the tool, ignoring user files.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file does not parse.
    pub fn bundled() -> StoryboardResult<Self> {
        finish(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Load configuration from a specific file layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StoryboardResult<Self> {
        debug!("Loading configuration from file");

        finish(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file fails to parse.
    #[instrument]
    pub fn load() -> StoryboardResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyboard/storyboard.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storyboard").required(false));

        finish(builder)
    }
}

fn finish(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> StoryboardResult<StoryboardConfig> {
    let merged = builder
        .build()
        .map_err(|e| ConfigError::new(ConfigErrorKind::Sources(e.to_string())))?;
    let config = merged
        .try_deserialize()
        .map_err(|e| ConfigError::new(ConfigErrorKind::Invalid(e.to_string())))?;
    Ok(config)
}
