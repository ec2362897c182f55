use async_trait::async_trait;
use log::info;

use crate::errors::{HarnessError, HarnessResult};
use crate::implementations::chat::{extract_json_payload, ChatClient};
use crate::models::report::{Criterion, QualityReport};
use crate::traits::assessor::QualityAssessor;

const SYSTEM_PROMPT: &str = "You are an expert code reviewer and software architect.";

/// Scores code across the nine fixed review criteria by prompting the chat
/// model with an explicit target schema and parsing the reply fail-closed.
pub struct LlmQualityAssessor {
    chat: ChatClient,
}

impl LlmQualityAssessor {
    pub fn new(chat: ChatClient) -> Self {
        Self { chat }
    }

    fn build_prompt(problem_statement: &str, source_code: &str, stdin: Option<&str>) -> String {
        let criteria = Criterion::ALL
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}. {}", i + 1, c.wire_name()))
            .collect::<Vec<_>>()
            .join("\n");

        let schema = Criterion::ALL
            .iter()
            .map(|c| format!("  \"{}\": {{\"score\": 0-10, \"explanation\": \"...\"}}", c.wire_name()))
            .collect::<Vec<_>>()
            .join(",\n");

        format!(
            "### PROBLEM STATEMENT:\n\
             {problem_statement}\n\n\
             ### CODE:\n\
             {source_code}\n\n\
             ### STDIN INPUT (IF ANY):\n\
             {stdin}\n\n\
             ### INSTRUCTION:\n\
             Evaluate the above code based on the following 9 parameters:\n\
             {criteria}\n\n\
             Provide a score and explanation for each of the 9 points, as a single JSON object:\n\n\
             ### OUTPUT FORMAT:\n\
             {{\n{schema}\n}}\n\
             Only return the JSON object. Do not include anything outside it.",
            stdin = stdin.unwrap_or("(none)"),
        )
    }

    /// Strictly parse a model reply into a quality report. Invalid JSON, a
    /// missing or unknown criterion, or a score outside [0,10] is a schema
    /// failure; nothing is default-filled.
    pub fn parse_report(response: &str) -> HarnessResult<QualityReport> {
        let payload = extract_json_payload(response);
        let value: serde_json::Value = serde_json::from_str(payload).map_err(|e| {
            HarnessError::SchemaParse(format!("quality assessment reply is not valid JSON: {}", e))
        })?;

        QualityReport::from_json(&value)
    }
}

#[async_trait]
impl QualityAssessor for LlmQualityAssessor {
    async fn assess(
        &self,
        problem_statement: &str,
        source_code: &str,
        stdin: Option<&str>,
    ) -> HarnessResult<QualityReport> {
        info!("Requesting quality assessment");

        let prompt = Self::build_prompt(problem_statement, source_code, stdin);
        let response = self.chat.complete(SYSTEM_PROMPT, &prompt).await?;

        Self::parse_report(&response)
    }
}
