use std::fs;
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Missing required API key: {0}")]
    MissingApiKey(String),
}

/// Environment variables consulted for the LLM API key, in order
const API_KEY_ENV_VARS: [&str; 2] = ["GROQ_API_KEY", "OPENAI_API_KEY"];

/// Configuration for the LLM chat service
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LlmConfig {
    /// API key; falls back to environment variables when absent
    pub api_key: Option<String>,

    /// Chat-completions endpoint (OpenAI-compatible)
    pub api_endpoint: Option<String>,

    /// Model to use
    pub model: Option<String>,

    /// Temperature for generation (0.0-1.0)
    pub temperature: Option<f32>,

    /// Maximum tokens per reply
    pub max_tokens: Option<usize>,

    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl LlmConfig {
    pub fn endpoint(&self) -> String {
        self.api_endpoint
            .clone()
            .unwrap_or_else(|| "https://api.groq.com/openai/v1/chat/completions".to_string())
    }

    pub fn model_name(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| "llama-3.3-70b-versatile".to_string())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(120))
    }

    /// Get the API key, checking environment variables if not in config
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        if let Some(api_key) = &self.api_key {
            debug!("Using API key from config");
            return Ok(api_key.clone());
        }

        for env_var in API_KEY_ENV_VARS {
            if let Ok(key) = std::env::var(env_var) {
                info!("Using API key from {}", env_var);
                return Ok(key);
            }
        }

        Err(ConfigError::MissingApiKey(format!(
            "set one of {} or put api_key in the config file",
            API_KEY_ENV_VARS.join(", ")
        )))
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_endpoint: None,
            model: None,
            temperature: Some(0.7),
            max_tokens: Some(4096),
            timeout_secs: None,
        }
    }
}

/// Configuration for the remote execution service
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExecutorConfig {
    /// Execution endpoint (Piston-compatible)
    pub api_endpoint: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl ExecutorConfig {
    pub fn endpoint(&self) -> String {
        self.api_endpoint
            .clone()
            .unwrap_or_else(|| "https://emkc.org/api/v2/piston/execute".to_string())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            api_endpoint: None,
            timeout_secs: None,
        }
    }
}

/// Top-level harness configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct HarnessConfig {
    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub executor: ExecutorConfig,
}

impl HarnessConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: HarnessConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}
