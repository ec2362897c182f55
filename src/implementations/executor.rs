use async_trait::async_trait;
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

use crate::errors::{HarnessError, HarnessResult};
use crate::implementations::config::ExecutorConfig;
use crate::models::execution::{ExecutionRequest, ExecutionResult};
use crate::traits::executor::SandboxExecutor;

/// Execution service wire types
#[derive(Debug, Serialize)]
struct ExecuteFile<'a> {
    name: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ExecutePayload<'a> {
    language: &'a str,
    version: &'a str,
    files: Vec<ExecuteFile<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stdin: Option<&'a str>,
}

/// Client for a Piston-style remote execution service.
///
/// Unsupported languages are rejected before anything goes over the wire.
/// Transport failures and missing output are absorbed into the returned
/// result; no retries.
pub struct PistonExecutor {
    config: ExecutorConfig,
    http_client: reqwest::Client,
}

impl PistonExecutor {
    pub fn new(config: ExecutorConfig) -> HarnessResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| HarnessError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    async fn send(&self, request: &ExecutionRequest, runtime_id: &str) -> HarnessResult<Value> {
        let payload = ExecutePayload {
            language: runtime_id,
            version: "*",
            files: vec![ExecuteFile {
                name: "main",
                content: &request.source_code,
            }],
            stdin: request.stdin.as_deref(),
        };

        debug!("Submitting {} source to {}", runtime_id, self.config.endpoint());

        let response = self
            .http_client
            .post(self.config.endpoint())
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                HarnessError::Network(format!("Network error when calling execution service: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error message".to_string());
            return Err(HarnessError::Http { status, message });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| HarnessError::Api(format!("Invalid JSON from execution service: {}", e)))
    }
}

#[async_trait]
impl SandboxExecutor for PistonExecutor {
    async fn execute(&self, request: &ExecutionRequest) -> ExecutionResult {
        let Some(runtime_id) = request.language.runtime_id() else {
            return ExecutionResult::failure(
                HarnessError::UnsupportedLanguage(request.language.to_string()).to_string(),
            );
        };

        let body = match self.send(request, runtime_id).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Execution request failed: {}", e);
                return ExecutionResult::failure(e.to_string());
            }
        };

        match body
            .get("run")
            .and_then(|run| run.get("output"))
            .and_then(Value::as_str)
        {
            Some(output) => ExecutionResult::success(output),
            None => {
                debug!("Execution service response had no run.output field");
                ExecutionResult::no_output()
            }
        }
    }
}
