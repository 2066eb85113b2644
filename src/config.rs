use crate::constants::{
    COMPLETIONS_PATH, CONNECT_TIMEOUT, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_VISION_MODEL,
    ENV_API_KEY, ENV_BASE_URL, ENV_MODEL, ENV_VISION_MODEL, READ_TIMEOUT,
};
use crate::error::AgentError;
use std::{env, time::Duration};

/// Values given on the command line; each one wins over its environment variable.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub vision_model: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Config {
    pub fn from_env(overrides: Overrides) -> Result<Self, AgentError> {
        Self::resolve(overrides, |key| env::var(key).ok())
    }

    pub fn resolve<F>(overrides: Overrides, lookup: F) -> Result<Self, AgentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let api_key = non_empty(overrides.api_key)
            .or_else(|| non_empty(lookup(ENV_API_KEY)))
            .ok_or_else(|| {
                AgentError::Configuration(format!(
                    "an API key is required; set {} or pass --api-key",
                    ENV_API_KEY
                ))
            })?;

        let base_url = non_empty(overrides.base_url)
            .or_else(|| non_empty(lookup(ENV_BASE_URL)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let model = non_empty(overrides.model)
            .or_else(|| non_empty(lookup(ENV_MODEL)))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let vision_model = non_empty(lookup(ENV_VISION_MODEL))
            .unwrap_or_else(|| DEFAULT_VISION_MODEL.to_string());

        Ok(Config {
            api_key: api_key.trim().to_string(),
            base_url,
            model,
            vision_model,
            connect_timeout: CONNECT_TIMEOUT,
            read_timeout: READ_TIMEOUT,
        })
    }

    pub fn completions_url(&self) -> String {
        format!("{}{}", self.base_url, COMPLETIONS_PATH)
    }
}
