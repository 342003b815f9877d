//! Language Parser Module
//!
//! Tree-sitter based lexical scanners. Each parser looks at one file in
//! isolation and reports import targets, re-export targets and capitalized
//! top-level declaration names. Nothing is resolved across files.
//!
//! ```rust,ignore
//! use confscope::analyzer::parser::{Language, create_parser};
//!
//! let parser = create_parser(Language::Tsx)?;
//! let result = parser.parse("src/App.tsx", content)?;
//! ```

pub mod language;
pub mod python;
pub mod rust_lang;
pub mod traits;
pub mod typescript;

pub use language::Language;
pub use python::PythonParser;
pub use rust_lang::RustParser;
pub use traits::{
    ParseResult, Parser, collapse_whitespace, create_ts_parser, field_name, get_node_text,
    is_capitalized, parse_tree, query_captures, unquote,
};
pub use typescript::TypeScriptParser;

use crate::types::{ConfscopeError, Result};

/// Create a parser for the given language.
///
/// Returns an error for languages without a wired-up grammar.
pub fn create_parser(language: Language) -> Result<Box<dyn Parser>> {
    match language {
        Language::TypeScript | Language::Tsx | Language::JavaScript | Language::Jsx => {
            Ok(Box::new(TypeScriptParser::new(language)?))
        }
        Language::Python => Ok(Box::new(PythonParser::new()?)),
        Language::Rust => Ok(Box::new(RustParser::new()?)),
        Language::Unknown => Err(ConfscopeError::Config(format!(
            "No parser support for language: {}",
            language
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_parser_each_language() {
        for lang in Language::all_variants() {
            let parser = create_parser(*lang).unwrap();
            assert_eq!(parser.language(), *lang);
        }
    }

    #[test]
    fn test_create_parser_unsupported() {
        assert!(create_parser(Language::Unknown).is_err());
    }
}
