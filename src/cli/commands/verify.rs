use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::cli::commands::{read_text_file, resolve_language};
use crate::cli::ui;
use crate::implementations::harness::VerificationHarness;

/// Full verification: synthesize test cases, run each one in the sandbox,
/// then score the code once
pub async fn execute(
    harness: &VerificationHarness,
    problem_path: &Path,
    code_path: &Path,
    language: Option<&str>,
    stdin: Option<&str>,
    output_path: Option<&Path>,
) -> Result<()> {
    ui::print_header("Verify Code");

    let problem = read_text_file(problem_path, "problem statement")?;
    let source_code = read_text_file(code_path, "source")?;
    let language = resolve_language(language)?;

    let spinner = ui::spinner_with_message("Synthesizing, executing, and scoring...");
    let outcome = harness.verify(&problem, &source_code, language, stdin).await?;
    spinner.finish_and_clear();

    ui::display_verdicts(&outcome.verdicts);
    ui::display_report(&outcome.report);

    let summary = outcome.to_string();
    if outcome.all_passed() {
        ui::print_success(&summary);
    } else {
        ui::print_warning(&summary);
    }

    if let Some(output_path) = output_path {
        fs::write(output_path, serde_json::to_string_pretty(&outcome)?)?;
        ui::print_success(format!("Outcome saved to {}", output_path.display()).as_str());
    }

    Ok(())
}
