use anyhow::Result;
use std::path::Path;

use crate::cli::commands::read_text_file;
use crate::cli::ui;
use crate::traits::assessor::QualityAssessor;

/// Score a source file across the nine review criteria
pub async fn execute(
    assessor: &dyn QualityAssessor,
    problem_path: &Path,
    code_path: &Path,
    stdin: Option<&str>,
) -> Result<()> {
    ui::print_header("Assess Code Quality");

    let problem = read_text_file(problem_path, "problem statement")?;
    let source_code = read_text_file(code_path, "source")?;

    let spinner = ui::spinner_with_message("Scoring against the nine review criteria...");
    let report = assessor.assess(&problem, &source_code, stdin).await?;
    spinner.finish_and_clear();

    ui::display_report(&report);

    Ok(())
}
