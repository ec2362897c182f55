use serde::{Deserialize, Serialize};

/// One synthesized test case: a stdin input and the stdout it should produce.
/// The field names match the keys the model is asked to emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected_output: String,
}

/// Outcome of running one test case against the code under verification.
/// When execution itself failed, `actual_output` carries the error text and
/// `passed` is false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub test_case: TestCase,
    pub actual_output: String,
    pub passed: bool,
}
