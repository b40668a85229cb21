#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_required_field, validate_url,
    Validate,
};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistralai/mistral-small-3.1-24b-instruct:free";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Everything the remote client needs, passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl ApiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Merge settings from, in order of precedence, explicit overrides,
    /// the config file and the environment-provided key.
    pub fn resolve(
        overrides: &SettingsOverrides,
        file: Option<&TomlConfig>,
        env_api_key: Option<String>,
    ) -> Result<Self> {
        let api = file.map(|f| &f.api);

        let api_key = overrides
            .api_key
            .clone()
            .filter(|key| is_usable(key))
            .or_else(|| api.and_then(|a| a.api_key.clone()).filter(|key| is_usable(key)))
            .or_else(|| env_api_key.filter(|key| is_usable(key)));
        let api_key = validate_required_field("api_key", &api_key)?.clone();

        let mut settings = ApiSettings::new(api_key);
        if let Some(endpoint) = overrides
            .endpoint
            .clone()
            .or_else(|| api.and_then(|a| a.endpoint.clone()))
        {
            settings.endpoint = endpoint;
        }
        if let Some(model) = overrides
            .model
            .clone()
            .or_else(|| api.and_then(|a| a.model.clone()))
        {
            settings.model = model;
        }
        if let Some(secs) = overrides
            .timeout_seconds
            .or_else(|| api.and_then(|a| a.timeout_seconds))
        {
            validate_positive_number("api.timeout_seconds", secs, 1)?;
            settings.timeout = Duration::from_secs(secs);
        }

        settings.validate()?;
        Ok(settings)
    }
}

// A `${VAR}` left behind by substitution means the variable was unset.
fn is_usable(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && !(key.starts_with("${") && key.ends_with('}'))
}

impl Validate for ApiSettings {
    fn validate(&self) -> Result<()> {
        validate_url("api.endpoint", &self.endpoint)?;
        validate_non_empty_string("api.model", &self.model)?;
        validate_non_empty_string("api.api_key", &self.api_key)?;
        Ok(())
    }
}

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub timeout_seconds: Option<u64>,
}
