use super::{
    Language, ParseResult, Parser, create_ts_parser, field_name, get_node_text, parse_tree,
    query_captures, unquote,
};
use crate::types::Result;

const IMPORT_QUERY: &str = r#"
    (import_statement
        source: (string) @source
    )
"#;

/// `import fs = require('fs')`
const IMPORT_REQUIRE_QUERY: &str = r#"
    (import_statement
        (import_require_clause
            (string) @source)
    )
"#;

const REEXPORT_QUERY: &str = r#"
    (export_statement
        source: (string) @source
    )
"#;

/// Parser for the TypeScript/JavaScript family.
///
/// `.ts` files use the plain TypeScript grammar (angle-bracket casts clash
/// with JSX); `.tsx`, `.js` and `.jsx` use the TSX grammar, which accepts JSX.
pub struct TypeScriptParser {
    language: Language,
}

impl TypeScriptParser {
    pub fn new(language: Language) -> Result<Self> {
        // Validate the grammar up front
        let _ = create_ts_parser(grammar_for(language), language.as_str())?;
        Ok(Self { language })
    }
}

fn grammar_for(language: Language) -> tree_sitter::Language {
    match language {
        Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        _ => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

impl Parser for TypeScriptParser {
    fn parse(&self, path: &str, content: &str) -> Result<ParseResult> {
        let ts_language = grammar_for(self.language);
        let tree = parse_tree(ts_language.clone(), self.language.as_str(), path, content)?;
        let root = tree.root_node();
        let bytes = content.as_bytes();

        let mut result = ParseResult::new();
        result.has_errors = root.has_error();

        for query in [IMPORT_QUERY, IMPORT_REQUIRE_QUERY] {
            for source in query_captures(&ts_language, query, root, bytes) {
                result.add_import(unquote(&source));
            }
        }
        for source in query_captures(&ts_language, REEXPORT_QUERY, root, bytes) {
            result.add_reexport(unquote(&source));
        }

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            collect_declaration(child, bytes, &mut result);
        }

        Ok(result)
    }

    fn language(&self) -> Language {
        self.language
    }
}

fn collect_declaration(node: tree_sitter::Node, content: &[u8], result: &mut ParseResult) {
    match node.kind() {
        "function_declaration"
        | "generator_function_declaration"
        | "class_declaration"
        | "abstract_class_declaration" => {
            if let Some(name) = field_name(node, content) {
                result.add_component(name);
            }
        }
        "lexical_declaration" | "variable_declaration" => {
            let mut cursor = node.walk();
            for declarator in node.named_children(&mut cursor) {
                if declarator.kind() != "variable_declarator" {
                    continue;
                }
                // Destructuring patterns have no single name
                if let Some(name_node) = declarator.child_by_field_name("name")
                    && name_node.kind() == "identifier"
                {
                    result.add_component(get_node_text(name_node, content));
                }
                if let Some(target) = require_target(declarator, content) {
                    result.add_import(target);
                }
            }
        }
        "export_statement" => {
            if let Some(declaration) = node.child_by_field_name("declaration") {
                collect_declaration(declaration, content, result);
            } else if let Some(value) = node.child_by_field_name("value")
                && matches!(value.kind(), "function_expression" | "class")
                && let Some(name) = field_name(value, content)
            {
                // export default function Named() {} parsed as an expression
                result.add_component(name);
            }
        }
        _ => {}
    }
}

/// `const x = require('y')` at top level counts as an import of `y`
fn require_target<'a>(declarator: tree_sitter::Node, content: &'a [u8]) -> Option<&'a str> {
    let value = declarator.child_by_field_name("value")?;
    if value.kind() != "call_expression" {
        return None;
    }

    let function = value.child_by_field_name("function")?;
    if get_node_text(function, content) != "require" {
        return None;
    }

    let arguments = value.child_by_field_name("arguments")?;
    let mut cursor = arguments.walk();
    let first = arguments.named_children(&mut cursor).next()?;
    if first.kind() != "string" {
        return None;
    }

    Some(unquote(get_node_text(first, content)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(language: Language, src: &str) -> ParseResult {
        TypeScriptParser::new(language)
            .unwrap()
            .parse("test", src)
            .unwrap()
    }

    #[test]
    fn test_imports_and_reexports() {
        let src = r#"
import React from 'react';
import { useState } from "react";
import "./styles.css";
export * from './components';
export { Button as PrimaryButton } from "./Button";
"#;
        let result = parse(Language::Tsx, src);

        assert_eq!(result.imports, vec!["react", "./styles.css"]);
        assert_eq!(result.reexports, vec!["./components", "./Button"]);
        assert!(!result.has_errors);
    }

    #[test]
    fn test_capitalized_top_level_declarations() {
        let src = r#"
export default function App() {
  return <div><Header /></div>;
}

function helper() {}
const Header = () => <h1>Title</h1>;
let counter = 0;
export class Store {}
export const Theme = { dark: true };
"#;
        let result = parse(Language::Tsx, src);

        assert_eq!(result.components, vec!["App", "Header", "Store", "Theme"]);
    }

    #[test]
    fn test_nested_declarations_ignored() {
        let src = r#"
function outer() {
  function Inner() {}
  const Nested = 1;
}
"#;
        let result = parse(Language::JavaScript, src);

        assert!(result.components.is_empty());
    }

    #[test]
    fn test_typescript_grammar_for_ts() {
        let src = r#"
import type { Config } from './config';
interface Props { name: string }
type Alias = string;
export abstract class Base {}
const value = <number>someValue;
"#;
        let result = parse(Language::TypeScript, src);

        assert_eq!(result.imports, vec!["./config"]);
        // Types are not components
        assert_eq!(result.components, vec!["Base"]);
        assert!(!result.has_errors);
    }

    #[test]
    fn test_commonjs_require() {
        let src = r#"
const Express = require('express');
const { join } = require("path");
module.exports = Express;
"#;
        let result = parse(Language::JavaScript, src);

        assert_eq!(result.imports, vec!["express", "path"]);
        assert_eq!(result.components, vec!["Express"]);
    }

    #[test]
    fn test_import_equals_require() {
        let src = "import fs = require('fs');\nexport default async function Main() {}\n";
        let result = parse(Language::TypeScript, src);

        assert_eq!(result.imports, vec!["fs"]);
        assert_eq!(result.components, vec!["Main"]);
        assert!(!result.has_errors);
    }

    #[test]
    fn test_syntax_errors_marked_partial() {
        let src = "import x from 'x';\nfunction Broken( {\n";
        let result = parse(Language::JavaScript, src);

        assert!(result.has_errors);
        assert_eq!(result.imports, vec!["x"]);
    }

    #[test]
    fn test_language_reported() {
        let parser = TypeScriptParser::new(Language::Jsx).unwrap();
        assert_eq!(parser.language(), Language::Jsx);
    }
}
