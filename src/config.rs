//! Runtime configuration for the automated opponent.

use crate::llm_client::{LlmConfig, LlmProvider};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for the automated opponent, loaded from TOML.
///
/// Every field has a default so a missing file is not an error; the API
/// key is never stored here, only read from the environment.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct AiConfig {
    /// LLM provider (openai or anthropic).
    #[serde(default = "default_provider")]
    llm_provider: LlmProvider,

    /// Model asked for move suggestions.
    #[serde(default = "default_model")]
    llm_model: String,

    /// Token cap for the one-digit reply.
    #[serde(default = "default_max_tokens")]
    llm_max_tokens: u32,

    /// Pacing delay before an automated move lands, in milliseconds.
    #[serde(default = "default_move_delay_ms")]
    move_delay_ms: u64,
}

fn default_provider() -> LlmProvider {
    LlmProvider::OpenAI
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    8
}

fn default_move_delay_ms() -> u64 {
    500
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            llm_provider: default_provider(),
            llm_model: default_model(),
            llm_max_tokens: default_max_tokens(),
            move_delay_ms: default_move_delay_ms(),
        }
    }
}

impl AiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("failed to parse config: {e}")))?;

        info!(model = %config.llm_model, "config loaded");
        Ok(config)
    }

    /// Loads the file at `path`, or the defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// The pacing delay as a [`Duration`].
    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }

    /// Builds an [`LlmConfig`] from this config plus the environment.
    ///
    /// Requires `OPENAI_API_KEY` or `ANTHROPIC_API_KEY` depending on the
    /// provider.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the credential is not set; callers
    /// treat that as "suggestion strategy unavailable", not as fatal.
    #[instrument(skip(self), fields(provider = ?self.llm_provider, model = %self.llm_model))]
    pub fn create_llm_config(&self) -> Result<LlmConfig, ConfigError> {
        let api_key = match self.llm_provider {
            LlmProvider::OpenAI => std::env::var("OPENAI_API_KEY").map_err(|_| {
                ConfigError::new("OPENAI_API_KEY environment variable not set".to_string())
            })?,
            LlmProvider::Anthropic => std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
                ConfigError::new("ANTHROPIC_API_KEY environment variable not set".to_string())
            })?,
        };

        Ok(LlmConfig::new(
            self.llm_provider,
            api_key,
            self.llm_model.clone(),
            self.llm_max_tokens,
        ))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// What went wrong.
    pub message: String,
    /// Line the error was raised from.
    pub line: u32,
    /// File the error was raised from.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error tagged with the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
