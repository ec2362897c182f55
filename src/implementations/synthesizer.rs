use async_trait::async_trait;
use log::{debug, info};

use crate::errors::{HarnessError, HarnessResult};
use crate::implementations::chat::{extract_json_payload, ChatClient};
use crate::models::testcase::TestCase;
use crate::traits::synthesizer::TestSynthesizer;

const SYSTEM_PROMPT: &str = "You are an AI coding assistant that generates precise test data.";

/// Synthesizes test cases by prompting the chat model for a JSON array of
/// {input, expected_output} objects.
pub struct LlmTestSynthesizer {
    chat: ChatClient,
}

impl LlmTestSynthesizer {
    pub fn new(chat: ChatClient) -> Self {
        Self { chat }
    }

    fn build_prompt(problem_statement: &str, source_code: &str) -> String {
        format!(
            "### PROBLEM STATEMENT:\n\
             {problem_statement}\n\n\
             ### CODE:\n\
             {source_code}\n\n\
             ### TASK:\n\
             Generate at least 5 diverse test cases in JSON format to test the provided code.\n\
             Each test case must have the following keys:\n\
             - \"input\": the stdin input value (string)\n\
             - \"expected_output\": the expected stdout output (string)\n\
             Ensure that the test cases include edge cases and variations.\n\
             Only return a valid JSON array. Do not include explanations."
        )
    }

    /// Strictly parse a model reply into an ordered test case sequence.
    /// Anything other than a JSON array of objects with both required keys
    /// is a schema failure; no partial sequence is produced.
    pub fn parse_cases(response: &str) -> HarnessResult<Vec<TestCase>> {
        let payload = extract_json_payload(response);
        serde_json::from_str(payload).map_err(|e| {
            HarnessError::SchemaParse(format!(
                "expected a JSON array of {{input, expected_output}} objects: {}",
                e
            ))
        })
    }
}

#[async_trait]
impl TestSynthesizer for LlmTestSynthesizer {
    async fn synthesize(
        &self,
        problem_statement: &str,
        source_code: &str,
    ) -> HarnessResult<Vec<TestCase>> {
        info!("Requesting test case synthesis");

        let prompt = Self::build_prompt(problem_statement, source_code);
        let response = self.chat.complete(SYSTEM_PROMPT, &prompt).await?;

        let cases = Self::parse_cases(&response)?;
        debug!("Synthesized {} test cases", cases.len());

        Ok(cases)
    }
}
