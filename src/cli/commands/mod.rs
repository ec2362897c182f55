use anyhow::{anyhow, Result};
use std::fs;
use std::path::Path;

use crate::cli::ui;
use crate::models::common::Language;

pub mod assess;
pub mod run;
pub mod synthesize;
pub mod verify;

/// Load a source or problem file, rejecting empty content
pub(crate) fn read_text_file(path: &Path, what: &str) -> Result<String> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {} file {}: {}", what, path.display(), e))?;

    if content.trim().is_empty() {
        return Err(anyhow!("{} file {} is empty", what, path.display()));
    }

    Ok(content)
}

/// Use the flag value when given, otherwise ask interactively. Unrecognized
/// names parse to `Custom` and are rejected by the executor with a
/// descriptive result.
pub(crate) fn resolve_language(flag: Option<&str>) -> Result<Language> {
    match flag {
        Some(name) => Ok(Language::parse(name)),
        None => Ok(ui::select_language()?),
    }
}
