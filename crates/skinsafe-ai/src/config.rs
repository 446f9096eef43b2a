//! AI classifier configuration

use serde::{Deserialize, Serialize};
use skinsafe_core::{Error, Result};
use std::path::Path;

/// Environment variable holding the completion API key
pub const API_KEY_ENV: &str = "SKINSAFE_API_KEY";

/// Configuration for the completion backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Chat-completions endpoint URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token for the completion API
    #[serde(default)]
    pub api_key: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Transport-level request timeout in seconds.
    ///
    /// The classifier itself imposes no timeout; this is the only place
    /// one is enforced.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file does not exist. The `SKINSAFE_API_KEY` environment variable
    /// overrides the file's API key.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))?
        } else {
            Self::default()
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config.api_key = key;
        }

        Ok(config)
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
