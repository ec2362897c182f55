use colored::*;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use textwrap::wrap;

use crate::models::common::Language;
use crate::models::report::QualityReport;
use crate::models::testcase::Verdict;

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Interactive selection of a language
pub fn select_language() -> std::io::Result<Language> {
    let names: Vec<String> = Language::SUPPORTED.iter().map(|l| l.to_string()).collect();

    let selection = Select::with_theme(&get_theme())
        .with_prompt("Select language")
        .items(&names)
        .default(0)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    Ok(Language::SUPPORTED[selection].clone())
}

/// Render the verdicts as a table with pass/fail badges
pub fn display_verdicts(verdicts: &[Verdict]) {
    print_header("Test Case Results");

    for (i, verdict) in verdicts.iter().enumerate() {
        let badge = if verdict.passed {
            "✓ Pass".green().bold()
        } else {
            "✗ Fail".red().bold()
        };

        println!("{} {}", format!("Case {}", i + 1).bold(), badge);
        println!("  Input:    {}", verdict.test_case.input);
        println!("  Expected: {}", verdict.test_case.expected_output);
        if !verdict.passed {
            println!("  Got:      {}", verdict.actual_output);
        }
    }
}

/// Render the nine-criterion quality report with colored scores
pub fn display_report(report: &QualityReport) {
    print_header("Code Quality Report");

    let width = Term::stdout().size().1 as usize;
    for (criterion, entry) in report.iter() {
        let score_text = format!("{}/10", entry.score);
        let colored_score = match entry.score {
            8..=10 => score_text.green().bold(),
            5..=7 => score_text.yellow().bold(),
            _ => score_text.red().bold(),
        };

        println!("{} {}", criterion.to_string().bold(), colored_score);
        for line in wrap(&entry.explanation, width.saturating_sub(10)) {
            println!("  {}", line);
        }
    }

    println!("\nOverall: {:.1}/10", report.overall());
}
