use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages the remote execution service can run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Python,
    JavaScript,
    C,
    CPlusPlus,
    Java,
    Go,
    Ruby,
    Php,
    Rust,
    Custom(String),
}

impl Language {
    /// All supported languages, in display order
    pub const SUPPORTED: [Language; 9] = [
        Language::Python,
        Language::JavaScript,
        Language::C,
        Language::CPlusPlus,
        Language::Java,
        Language::Go,
        Language::Ruby,
        Language::Php,
        Language::Rust,
    ];

    /// Identifier understood by the execution service, or `None` when the
    /// language is outside the supported set
    pub fn runtime_id(&self) -> Option<&'static str> {
        match self {
            Language::Python => Some("python3"),
            Language::JavaScript => Some("javascript"),
            Language::C => Some("c"),
            Language::CPlusPlus => Some("cpp"),
            Language::Java => Some("java"),
            Language::Go => Some("go"),
            Language::Ruby => Some("ruby"),
            Language::Php => Some("php"),
            Language::Rust => Some("rust"),
            Language::Custom(_) => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.runtime_id().is_some()
    }

    /// Parse a human-facing language name; anything unrecognized becomes
    /// `Custom` and is rejected at the executor boundary
    pub fn parse(name: &str) -> Language {
        match name.to_lowercase().as_str() {
            "python" | "py" => Language::Python,
            "javascript" | "js" => Language::JavaScript,
            "c" => Language::C,
            "c++" | "cpp" => Language::CPlusPlus,
            "java" => Language::Java,
            "go" => Language::Go,
            "ruby" | "rb" => Language::Ruby,
            "php" => Language::Php,
            "rust" | "rs" => Language::Rust,
            _ => Language::Custom(name.to_string()),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Python => write!(f, "Python"),
            Language::JavaScript => write!(f, "JavaScript"),
            Language::C => write!(f, "C"),
            Language::CPlusPlus => write!(f, "C++"),
            Language::Java => write!(f, "Java"),
            Language::Go => write!(f, "Go"),
            Language::Ruby => write!(f, "Ruby"),
            Language::Php => write!(f, "PHP"),
            Language::Rust => write!(f, "Rust"),
            Language::Custom(name) => write!(f, "{}", name),
        }
    }
}
