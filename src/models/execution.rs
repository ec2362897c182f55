use serde::{Deserialize, Serialize};

use crate::errors::HarnessError;
use crate::models::common::Language;

/// A single request to the remote execution service. Immutable, constructed
/// per call.
#[derive(Debug, Clone)]
pub struct ExecutionRequest {
    pub language: Language,
    pub source_code: String,
    pub stdin: Option<String>,
}

impl ExecutionRequest {
    pub fn new(language: Language, source_code: impl Into<String>) -> Self {
        Self {
            language,
            source_code: source_code.into(),
            stdin: None,
        }
    }

    pub fn with_stdin(mut self, stdin: impl Into<String>) -> Self {
        self.stdin = Some(stdin.into());
        self
    }
}

/// Captured outcome of one sandboxed run.
///
/// `stdout: Some("")` is a valid empty success; `stdout: None` means the
/// service produced no usable output, with `error` saying why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub stdout: Option<String>,
    pub succeeded: bool,
    pub error: Option<String>,
}

impl ExecutionResult {
    /// Successful run; stdout is stored trimmed of leading/trailing
    /// whitespace
    pub fn success(stdout: &str) -> Self {
        Self {
            stdout: Some(stdout.trim().to_string()),
            succeeded: true,
            error: None,
        }
    }

    /// The service replied but without an output field, which usually means
    /// a compilation or runtime error
    pub fn no_output() -> Self {
        Self {
            stdout: None,
            succeeded: false,
            error: Some(HarnessError::NoOutput.to_string()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            stdout: None,
            succeeded: false,
            error: Some(message.into()),
        }
    }

    /// stdout when the run succeeded, otherwise the error text
    pub fn output_or_error(&self) -> &str {
        match (&self.stdout, &self.error) {
            (Some(stdout), _) => stdout,
            (None, Some(error)) => error,
            (None, None) => "",
        }
    }
}
