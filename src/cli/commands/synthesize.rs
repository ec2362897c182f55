use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::cli::commands::read_text_file;
use crate::cli::ui;
use crate::traits::synthesizer::TestSynthesizer;

/// Generate test cases for a problem and show them without running any
pub async fn execute(
    synthesizer: &dyn TestSynthesizer,
    problem_path: &Path,
    code_path: &Path,
    output_path: Option<&Path>,
) -> Result<()> {
    ui::print_header("Synthesize Test Cases");

    let problem = read_text_file(problem_path, "problem statement")?;
    let source_code = read_text_file(code_path, "source")?;

    let spinner = ui::spinner_with_message("Asking the model for test cases...");
    let cases = synthesizer.synthesize(&problem, &source_code).await?;
    spinner.finish_and_clear();

    ui::print_info(format!("Synthesized {} test cases", cases.len()).as_str());
    for (i, case) in cases.iter().enumerate() {
        ui::print_result(
            &format!("Case {}", i + 1),
            &format!("input {:?} expects {:?}", case.input, case.expected_output),
        );
    }

    if let Some(output_path) = output_path {
        fs::write(output_path, serde_json::to_string_pretty(&cases)?)?;
        ui::print_success(format!("Test cases saved to {}", output_path.display()).as_str());
    }

    Ok(())
}
