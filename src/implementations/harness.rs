use std::time::Instant;

use chrono::Utc;
use log::{info, warn};

use crate::errors::HarnessResult;
use crate::models::common::Language;
use crate::models::execution::ExecutionRequest;
use crate::models::testcase::Verdict;
use crate::models::verification::VerificationOutcome;
use crate::traits::assessor::QualityAssessor;
use crate::traits::executor::SandboxExecutor;
use crate::traits::synthesizer::TestSynthesizer;

/// Orchestrates one verification run: synthesize test cases once, execute
/// the code against each case in order, assess quality exactly once.
///
/// Components are injected as trait objects so callers can plug in test
/// doubles or alternate backends; there are no process-wide client handles.
pub struct VerificationHarness {
    executor: Box<dyn SandboxExecutor>,
    synthesizer: Box<dyn TestSynthesizer>,
    assessor: Box<dyn QualityAssessor>,
}

impl VerificationHarness {
    pub fn new(
        executor: Box<dyn SandboxExecutor>,
        synthesizer: Box<dyn TestSynthesizer>,
        assessor: Box<dyn QualityAssessor>,
    ) -> Self {
        Self {
            executor,
            synthesizer,
            assessor,
        }
    }

    /// Run the full loop.
    ///
    /// Synthesis and assessment failures abort the run. An execution failure
    /// becomes a failed verdict and the loop continues, so one broken test
    /// case never discards the rest.
    pub async fn verify(
        &self,
        problem_statement: &str,
        source_code: &str,
        language: Language,
        stdin: Option<&str>,
    ) -> HarnessResult<VerificationOutcome> {
        let started_at = Utc::now();
        let clock = Instant::now();

        let cases = self
            .synthesizer
            .synthesize(problem_statement, source_code)
            .await?;
        info!(
            "Verifying {} code against {} synthesized test cases",
            language,
            cases.len()
        );

        let mut verdicts = Vec::with_capacity(cases.len());
        for case in cases {
            let request = ExecutionRequest::new(language.clone(), source_code)
                .with_stdin(case.input.clone());
            let result = self.executor.execute(&request).await;

            if !result.succeeded {
                warn!(
                    "Execution failed for input {:?}: {}",
                    case.input,
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }

            let actual_output = result.output_or_error().to_string();
            let passed = result.succeeded && actual_output == case.expected_output;
            verdicts.push(Verdict {
                test_case: case,
                actual_output,
                passed,
            });
        }

        // One assessment per run, regardless of the test case count
        let report = self
            .assessor
            .assess(problem_statement, source_code, stdin)
            .await?;

        info!(
            "Verification finished: {}/{} passed",
            verdicts.iter().filter(|v| v.passed).count(),
            verdicts.len()
        );

        Ok(VerificationOutcome {
            verdicts,
            report,
            started_at,
            elapsed: clock.elapsed(),
        })
    }
}
