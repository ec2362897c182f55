use anyhow::Result;
use std::path::Path;

use crate::cli::commands::{read_text_file, resolve_language};
use crate::cli::ui;
use crate::models::execution::ExecutionRequest;
use crate::traits::executor::SandboxExecutor;

/// Run a single source file in the remote sandbox and show its output
pub async fn execute(
    executor: &dyn SandboxExecutor,
    code_path: &Path,
    language: Option<&str>,
    stdin: Option<&str>,
) -> Result<()> {
    ui::print_header("Run Code");

    let source_code = read_text_file(code_path, "source")?;
    let language = resolve_language(language)?;

    let mut request = ExecutionRequest::new(language, source_code);
    if let Some(stdin) = stdin {
        request = request.with_stdin(stdin);
    }

    let spinner = ui::spinner_with_message("Executing in remote sandbox...");
    let result = executor.execute(&request).await;
    spinner.finish_and_clear();

    match result.stdout {
        Some(stdout) => {
            ui::print_header("Execution Output");
            println!("{}", stdout);
        }
        None => {
            ui::print_error(result.error.as_deref().unwrap_or("execution failed"));
        }
    }

    Ok(())
}
