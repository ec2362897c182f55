//! Test doubles for the harness trait seams.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::errors::{HarnessError, HarnessResult};
use crate::models::execution::{ExecutionRequest, ExecutionResult};
use crate::models::report::{Criterion, QualityReport};
use crate::models::testcase::TestCase;
use crate::traits::assessor::QualityAssessor;
use crate::traits::executor::SandboxExecutor;
use crate::traits::synthesizer::TestSynthesizer;

pub fn case(input: &str, expected: &str) -> TestCase {
    TestCase {
        input: input.to_string(),
        expected_output: expected.to_string(),
    }
}

/// A well-formed nine-criterion report for doubles and schema tests
pub fn full_report() -> QualityReport {
    let mut object = serde_json::Map::new();
    for criterion in Criterion::ALL {
        object.insert(
            criterion.wire_name().to_string(),
            json!({"score": 7, "explanation": "adequate"}),
        );
    }
    QualityReport::from_json(&serde_json::Value::Object(object)).unwrap()
}

/// Executor double that replays scripted results in order and counts calls
pub struct ScriptedExecutor {
    results: Mutex<Vec<ExecutionResult>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedExecutor {
    pub fn new(results: Vec<ExecutionResult>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                results: Mutex::new(results),
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl SandboxExecutor for ScriptedExecutor {
    async fn execute(&self, _request: &ExecutionRequest) -> ExecutionResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            ExecutionResult::failure("scripted executor exhausted")
        } else {
            results.remove(0)
        }
    }
}

/// Synthesizer double: fixed cases or a scripted schema failure
pub enum ScriptedSynthesizer {
    Cases(Vec<TestCase>),
    FailsWith(String),
}

#[async_trait]
impl TestSynthesizer for ScriptedSynthesizer {
    async fn synthesize(&self, _problem: &str, _code: &str) -> HarnessResult<Vec<TestCase>> {
        match self {
            ScriptedSynthesizer::Cases(cases) => Ok(cases.clone()),
            ScriptedSynthesizer::FailsWith(message) => {
                Err(HarnessError::SchemaParse(message.clone()))
            }
        }
    }
}

/// Assessor double that counts calls; the failing variant simulates a reply
/// that violates the report schema
pub struct ScriptedAssessor {
    report: Option<QualityReport>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedAssessor {
    pub fn succeeding() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                report: Some(full_report()),
                calls: calls.clone(),
            },
            calls,
        )
    }

    pub fn failing() -> Self {
        Self {
            report: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl QualityAssessor for ScriptedAssessor {
    async fn assess(
        &self,
        _problem: &str,
        _code: &str,
        _stdin: Option<&str>,
    ) -> HarnessResult<QualityReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.report {
            Some(report) => Ok(report.clone()),
            None => Err(HarnessError::SchemaParse(
                "scripted assessment failure".to_string(),
            )),
        }
    }
}
