use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{HarnessError, HarnessResult};
use crate::implementations::config::LlmConfig;

/// Chat API request and response types
#[derive(Debug, Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: usize,
}

#[derive(Debug, Deserialize)]
struct ChatResponseChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatResponseChoice>,
}

/// Client for an OpenAI-compatible chat-completions endpoint.
///
/// Both the test synthesizer and the quality assessor go through this
/// client; each call is one request carrying a system line and one user
/// prompt. The HTTP timeout comes from the configuration so callers control
/// cancellation.
#[derive(Clone)]
pub struct ChatClient {
    config: LlmConfig,
    http_client: reqwest::Client,
}

impl ChatClient {
    pub fn new(config: LlmConfig) -> HarnessResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| HarnessError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Send one prompt and return the raw text of the first choice
    pub async fn complete(&self, system: &str, prompt: &str) -> HarnessResult<String> {
        let api_key = self.config.resolve_api_key()?;
        let endpoint = self.config.endpoint();
        let model = self.config.model_name();

        let request = ChatRequest {
            model: model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: self.config.temperature.unwrap_or(0.7),
            max_tokens: self.config.max_tokens.unwrap_or(4096),
        };

        info!("Making LLM API request to {}", endpoint);
        debug!("Model: {}", model);
        debug!("Prompt length: {} characters", prompt.len());

        let response = self
            .http_client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let message = format!("Network error when calling LLM API: {}", e);
                warn!("{}", message);
                HarnessError::Network(message)
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error message".to_string());
            warn!("API error: HTTP {} - {}", status, message);
            return Err(HarnessError::Http { status, message });
        }

        let response: ChatResponse = response
            .json()
            .await
            .map_err(|e| HarnessError::Api(format!("Failed to parse API response: {}", e)))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| HarnessError::Api("No response from API".to_string()))?;

        debug!("Response content length: {} characters", content.len());
        Ok(content)
    }
}

/// Take the fenced block when the model wraps its JSON in markdown,
/// otherwise the whole reply. The payload itself is parsed strictly by the
/// caller; nothing inside it is repaired.
pub(crate) fn extract_json_payload(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(start) = trimmed.find("```") else {
        return trimmed;
    };

    let after = &trimmed[start + 3..];
    // Skip the info string ("json", ...) up to the first newline
    let body_start = after.find('\n').map(|i| i + 1).unwrap_or(0);
    let body = &after[body_start..];

    match body.find("```") {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}
