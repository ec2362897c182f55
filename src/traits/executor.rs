use async_trait::async_trait;

use crate::models::execution::{ExecutionRequest, ExecutionResult};

/// Seam for running source code in an isolated environment.
///
/// Implementations never abort the caller: unsupported languages, transport
/// failures, and missing output are all captured in the returned
/// `ExecutionResult`. Whether to retry is the caller's decision.
#[async_trait]
pub trait SandboxExecutor: Send + Sync {
    async fn execute(&self, request: &ExecutionRequest) -> ExecutionResult;
}
