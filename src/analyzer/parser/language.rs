//! Language Detection Module
//!
//! Single source of truth for mapping file names to the languages the
//! lexical scanner understands. Anything not in the table is `Unknown` and
//! is left alone by the scanner.
//!
//! ```rust,ignore
//! use confscope::analyzer::parser::Language;
//!
//! assert_eq!(Language::from_path("src/App.tsx"), Language::Tsx);
//! assert!(Language::Tsx.has_parser_support());
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

// =============================================================================
// Language Metadata Table
// =============================================================================

struct LanguageMeta {
    /// Display name (human-readable)
    display_name: &'static str,
    extensions: &'static [&'static str],
    /// Whether a tree-sitter grammar is wired up for this language
    has_parser: bool,
}

macro_rules! lang_meta {
    ($display:literal, [$($ext:literal),*], $parser:literal) => {
        LanguageMeta {
            display_name: $display,
            extensions: &[$($ext),*],
            has_parser: $parser,
        }
    };
}

impl Language {
    fn meta(&self) -> LanguageMeta {
        match self {
            Language::TypeScript => lang_meta!("TypeScript", ["ts", "mts", "cts"], true),
            Language::Tsx => lang_meta!("TSX", ["tsx"], true),
            Language::JavaScript => lang_meta!("JavaScript", ["js", "mjs", "cjs"], true),
            Language::Jsx => lang_meta!("JSX", ["jsx"], true),
            Language::Python => lang_meta!("Python", ["py", "pyi"], true),
            Language::Rust => lang_meta!("Rust", ["rs"], true),
            Language::Unknown => lang_meta!("Unknown", [], false),
        }
    }
}

// =============================================================================
// Language Enum Definition
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    TypeScript,
    Tsx,
    JavaScript,
    Jsx,
    Python,
    Rust,
    #[default]
    Unknown,
}

impl Language {
    /// Display name (human-readable)
    pub fn as_str(&self) -> &'static str {
        self.meta().display_name
    }

    pub fn from_extension(ext: &str) -> Self {
        let ext_lower = ext.to_lowercase();

        for lang in Self::all_variants() {
            if lang.meta().extensions.iter().any(|e| *e == ext_lower) {
                return *lang;
            }
        }

        Language::Unknown
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }

    pub fn has_parser_support(&self) -> bool {
        self.meta().has_parser
    }

    pub fn all_variants() -> &'static [Language] {
        &[
            Language::TypeScript,
            Language::Tsx,
            Language::JavaScript,
            Language::Jsx,
            Language::Python,
            Language::Rust,
        ]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("ts"), Language::TypeScript);
        assert_eq!(Language::from_extension("MTS"), Language::TypeScript);
        assert_eq!(Language::from_extension("tsx"), Language::Tsx);
        assert_eq!(Language::from_extension("mjs"), Language::JavaScript);
        assert_eq!(Language::from_extension("jsx"), Language::Jsx);
        assert_eq!(Language::from_extension("pyi"), Language::Python);
        assert_eq!(Language::from_extension("rs"), Language::Rust);
        assert_eq!(Language::from_extension("go"), Language::Unknown);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Language::from_path("src/App.tsx"), Language::Tsx);
        assert_eq!(Language::from_path("lib/index.js"), Language::JavaScript);
        assert_eq!(Language::from_path("Makefile"), Language::Unknown);
        assert_eq!(Language::from_path("package.json"), Language::Unknown);
    }

    #[test]
    fn test_serialized_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Tsx).unwrap(), "\"tsx\"");
        assert_eq!(
            serde_json::to_string(&Language::TypeScript).unwrap(),
            "\"typescript\""
        );
        assert_eq!(Language::Tsx.to_string(), "TSX");
    }

    #[test]
    fn test_parser_support() {
        for lang in Language::all_variants() {
            assert!(lang.has_parser_support(), "{:?} has no parser", lang);
        }
        assert!(!Language::Unknown.has_parser_support());
    }
}
