pub mod cli;
pub mod errors;
pub mod implementations;
pub mod models;
pub mod traits;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use errors::{HarnessError, HarnessResult};
pub use implementations::assessor::LlmQualityAssessor;
pub use implementations::chat::ChatClient;
pub use implementations::config::{ConfigError, ExecutorConfig, HarnessConfig, LlmConfig};
pub use implementations::executor::PistonExecutor;
pub use implementations::harness::VerificationHarness;
pub use implementations::synthesizer::LlmTestSynthesizer;
pub use models::{
    common::Language,
    execution::{ExecutionRequest, ExecutionResult},
    report::{Criterion, CriterionScore, QualityReport},
    testcase::{TestCase, Verdict},
    verification::VerificationOutcome,
};
pub use traits::{QualityAssessor, SandboxExecutor, TestSynthesizer};
