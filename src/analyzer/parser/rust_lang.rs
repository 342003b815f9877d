use super::{
    Language, ParseResult, Parser, collapse_whitespace, create_ts_parser, field_name,
    get_node_text, parse_tree,
};
use crate::types::Result;

/// Item kinds whose `name` field is a candidate component
const NAMED_ITEMS: &[&str] = &[
    "struct_item",
    "enum_item",
    "union_item",
    "trait_item",
    "type_item",
    "function_item",
    "const_item",
    "static_item",
    "mod_item",
];

pub struct RustParser;

impl RustParser {
    pub fn new() -> Result<Self> {
        // Validate parser creation at construction time
        let _ = create_ts_parser(tree_sitter_rust::LANGUAGE, "Rust")?;
        Ok(Self)
    }
}

impl Parser for RustParser {
    fn parse(&self, path: &str, content: &str) -> Result<ParseResult> {
        let tree = parse_tree(tree_sitter_rust::LANGUAGE, "Rust", path, content)?;
        let root = tree.root_node();
        let bytes = content.as_bytes();

        let mut result = ParseResult::new();
        result.has_errors = root.has_error();

        let mut cursor = root.walk();
        for item in root.named_children(&mut cursor) {
            match item.kind() {
                "use_declaration" => extract_use(item, bytes, &mut result),
                "extern_crate_declaration" => {
                    if let Some(name) = field_name(item, bytes) {
                        result.add_import(name);
                    }
                }
                kind if NAMED_ITEMS.contains(&kind) => {
                    if let Some(name) = field_name(item, bytes) {
                        result.add_component(name);
                    }
                }
                _ => {}
            }
        }

        Ok(result)
    }

    fn language(&self) -> Language {
        Language::Rust
    }
}

/// `use a::b;` is an import, `pub use a::b;` (any visibility) a re-export
fn extract_use(node: tree_sitter::Node, content: &[u8], result: &mut ParseResult) {
    let Some(argument) = node.child_by_field_name("argument") else {
        return;
    };
    let target = collapse_whitespace(get_node_text(argument, content));

    let mut cursor = node.walk();
    let is_public = node
        .named_children(&mut cursor)
        .any(|c| c.kind() == "visibility_modifier");

    if is_public {
        result.add_reexport(target);
    } else {
        result.add_import(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> ParseResult {
        RustParser::new().unwrap().parse("lib.rs", src).unwrap()
    }

    #[test]
    fn test_use_and_reexport() {
        let src = r#"
extern crate serde;
use std::collections::HashMap;
use std::{
    fs,
    io,
};
pub use crate::types::Node;
pub(crate) use self::inner::*;
"#;
        let result = parse(src);

        assert_eq!(
            result.imports,
            vec!["serde", "std::collections::HashMap", "std::{ fs, io, }"]
        );
        assert_eq!(result.reexports, vec!["crate::types::Node", "self::inner::*"]);
    }

    #[test]
    fn test_capitalized_items() {
        let src = r#"
pub struct Config;
enum Mode { A, B }
pub trait Render {}
type Alias = u8;
const MAX: usize = 3;
fn main() {
    struct Hidden;
}
mod tests {}
impl Config {}
"#;
        let result = parse(src);

        assert_eq!(result.components, vec!["Config", "Mode", "Render", "Alias", "MAX"]);
        assert!(!result.has_errors);
    }

    #[test]
    fn test_language() {
        assert_eq!(RustParser::new().unwrap().language(), Language::Rust);
    }
}
