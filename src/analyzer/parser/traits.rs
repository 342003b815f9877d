use tree_sitter::{Query, QueryCursor, StreamingIterator};

use crate::types::{ConfscopeError, FileSymbols, Result, ScanStatus};

/// Names pulled out of one file. Each list keeps first-occurrence order and
/// holds no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub imports: Vec<String>,
    pub reexports: Vec<String>,
    pub components: Vec<String>,
    /// The syntax tree contained ERROR or MISSING nodes
    pub has_errors: bool,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_import(&mut self, target: impl Into<String>) {
        push_unique(&mut self.imports, target.into());
    }

    pub fn add_reexport(&mut self, target: impl Into<String>) {
        push_unique(&mut self.reexports, target.into());
    }

    /// Records a declaration name; names that are not capitalized are ignored.
    pub fn add_component(&mut self, name: &str) {
        if is_capitalized(name) {
            push_unique(&mut self.components, name.to_string());
        }
    }

    pub fn into_symbols(self, language: super::Language) -> FileSymbols {
        FileSymbols {
            language,
            status: if self.has_errors {
                ScanStatus::Partial
            } else {
                ScanStatus::Parsed
            },
            imports: self.imports,
            reexports: self.reexports,
            components: self.components,
            message: None,
        }
    }
}

pub trait Parser: Send + Sync {
    fn parse(&self, path: &str, content: &str) -> Result<ParseResult>;
    fn language(&self) -> super::Language;
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !value.is_empty() && !list.contains(&value) {
        list.push(value);
    }
}

/// First character is an uppercase letter
pub fn is_capitalized(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Strip one layer of matching quotes from a string literal
pub fn unquote(literal: &str) -> &str {
    let trimmed = literal.trim();
    for q in ['"', '\'', '`'] {
        if trimmed.len() >= 2 && trimmed.starts_with(q) && trimmed.ends_with(q) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}

/// Collapse runs of whitespace (including newlines) into single spaces
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract text content from a tree-sitter node.
/// Returns empty string if extraction fails (with debug logging).
#[inline]
pub fn get_node_text<'a>(node: tree_sitter::Node, content: &'a [u8]) -> &'a str {
    node.utf8_text(content).unwrap_or_else(|e| {
        tracing::debug!(
            "UTF-8 extraction failed at {}:{}-{}:{}: {}",
            node.start_position().row + 1,
            node.start_position().column,
            node.end_position().row + 1,
            node.end_position().column,
            e
        );
        ""
    })
}

/// Name of a declaration node via its `name` field
pub fn field_name<'a>(node: tree_sitter::Node, content: &'a [u8]) -> Option<&'a str> {
    node.child_by_field_name("name")
        .map(|n| get_node_text(n, content))
        .filter(|s| !s.is_empty())
}

/// Create a tree-sitter parser for the given language.
pub fn create_ts_parser<L: Into<tree_sitter::Language>>(
    language: L,
    lang_name: &str,
) -> Result<tree_sitter::Parser> {
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(&language.into()).map_err(|e| {
        ConfscopeError::parse(
            String::new(),
            format!("Failed to set {} language: {}", lang_name, e),
        )
    })?;
    Ok(parser)
}

/// Parse `content` with a fresh parser, attributing failures to `path`.
pub fn parse_tree<L: Into<tree_sitter::Language>>(
    language: L,
    lang_name: &str,
    path: &str,
    content: &str,
) -> Result<tree_sitter::Tree> {
    let mut parser = create_ts_parser(language, lang_name).map_err(|e| match e {
        ConfscopeError::Parse { message, .. } => ConfscopeError::parse(path, message),
        other => other,
    })?;

    parser
        .parse(content, None)
        .ok_or_else(|| ConfscopeError::parse(path, format!("Failed to parse {} file", lang_name)))
}

/// Execute a query and collect the text of every capture, in match order.
/// An invalid query yields nothing (logged at debug level).
pub fn query_captures(
    language: &tree_sitter::Language,
    query_str: &str,
    root: tree_sitter::Node,
    content: &[u8],
) -> Vec<String> {
    let mut results = Vec::new();

    let query = match Query::new(language, query_str) {
        Ok(q) => q,
        Err(e) => {
            tracing::debug!("Invalid tree-sitter query: {}", e);
            return results;
        }
    };

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, root, content);

    while let Some(m) = matches.next() {
        for cap in m.captures.iter() {
            results.push(get_node_text(cap.node, content).to_string());
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::parser::Language;

    #[test]
    fn test_is_capitalized() {
        assert!(is_capitalized("App"));
        assert!(is_capitalized("MAX_SIZE"));
        assert!(is_capitalized("Ärger"));
        assert!(!is_capitalized("app"));
        assert!(!is_capitalized("_Private"));
        assert!(!is_capitalized(""));
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("'react'"), "react");
        assert_eq!(unquote("\"./App\""), "./App");
        assert_eq!(unquote("`x`"), "x");
        assert_eq!(unquote("'"), "'");
        assert_eq!(unquote("plain"), "plain");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("std::{\n    fs,\n    io,\n}"),
            "std::{ fs, io, }"
        );
    }

    #[test]
    fn test_parse_result_dedup_and_filter() {
        let mut result = ParseResult::new();
        result.add_import("react");
        result.add_import("react");
        result.add_import("");
        result.add_component("App");
        result.add_component("helper");
        result.add_component("App");

        assert_eq!(result.imports, vec!["react"]);
        assert_eq!(result.components, vec!["App"]);
    }

    #[test]
    fn test_into_symbols_status() {
        let mut result = ParseResult::new();
        assert_eq!(
            result.clone().into_symbols(Language::Rust).status,
            ScanStatus::Parsed
        );

        result.has_errors = true;
        let symbols = result.into_symbols(Language::Rust);
        assert_eq!(symbols.status, ScanStatus::Partial);
        assert_eq!(symbols.language, Language::Rust);
        assert!(symbols.message.is_none());
    }

    #[test]
    fn test_query_captures_invalid_query() {
        let tree = parse_tree(tree_sitter_rust::LANGUAGE, "Rust", "x.rs", "fn main() {}").unwrap();
        let language: tree_sitter::Language = tree_sitter_rust::LANGUAGE.into();
        let caps = query_captures(&language, "(not_a_node) @x", tree.root_node(), b"");
        assert!(caps.is_empty());
    }
}
