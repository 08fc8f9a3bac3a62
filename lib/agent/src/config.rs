//! Agent configuration.
//!
//! Strongly-typed configuration loaded from environment variables via the
//! `config` crate. The API key is the one required secret; everything
//! else carries a default.

use serde::Deserialize;

/// Configuration for constructing an [`Agent`](crate::Agent).
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// API key for the chat-completions provider. Required; absence is a
    /// fatal construction error.
    #[serde(default)]
    pub openai_api_key: String,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub openai_model: String,

    /// Base URL of the provider API.
    #[serde(default = "default_base_url")]
    pub openai_base_url: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Outbound request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl AgentConfig {
    /// Creates a configuration with the given API key and all defaults.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            openai_api_key: api_key.into(),
            openai_model: default_model(),
            openai_base_url: default_base_url(),
            temperature: default_temperature(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    /// Loads configuration from environment variables
    /// (`OPENAI_API_KEY`, `OPENAI_MODEL`, `OPENAI_BASE_URL`, ...).
    ///
    /// # Errors
    ///
    /// Returns an error if the environment contains values that cannot be
    /// deserialized into the expected types.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
