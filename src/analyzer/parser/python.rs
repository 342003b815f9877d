use super::{Language, ParseResult, Parser, create_ts_parser, field_name, get_node_text, parse_tree};
use crate::types::Result;

pub struct PythonParser;

impl PythonParser {
    pub fn new() -> Result<Self> {
        // Validate that the language is available
        let _ = create_ts_parser(tree_sitter_python::LANGUAGE, "Python")?;
        Ok(Self)
    }
}

impl Parser for PythonParser {
    fn parse(&self, path: &str, content: &str) -> Result<ParseResult> {
        let tree = parse_tree(tree_sitter_python::LANGUAGE, "Python", path, content)?;
        let root = tree.root_node();
        let bytes = content.as_bytes();

        let mut result = ParseResult::new();
        result.has_errors = root.has_error();

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "import_statement" => extract_import(child, bytes, &mut result),
                "import_from_statement" => extract_from_import(child, bytes, &mut result),
                "future_import_statement" => result.add_import("__future__"),
                _ => collect_declaration(child, bytes, &mut result),
            }
        }

        Ok(result)
    }

    fn language(&self) -> Language {
        Language::Python
    }
}

/// `import a.b, c as d`
fn extract_import(node: tree_sitter::Node, content: &[u8], result: &mut ParseResult) {
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        let module = match name.kind() {
            "aliased_import" => name
                .child_by_field_name("name")
                .map(|n| get_node_text(n, content))
                .unwrap_or_default(),
            _ => get_node_text(name, content),
        };
        result.add_import(module);
    }
}

/// `from x import y`; a wildcard import forwards the module's names
fn extract_from_import(node: tree_sitter::Node, content: &[u8], result: &mut ParseResult) {
    let Some(module) = node.child_by_field_name("module_name") else {
        return;
    };
    let module = get_node_text(module, content);

    let mut cursor = node.walk();
    let wildcard = node
        .named_children(&mut cursor)
        .any(|c| c.kind() == "wildcard_import");

    if wildcard {
        result.add_reexport(module);
    } else {
        result.add_import(module);
    }
}

fn collect_declaration(node: tree_sitter::Node, content: &[u8], result: &mut ParseResult) {
    match node.kind() {
        "class_definition" | "function_definition" => {
            if let Some(name) = field_name(node, content) {
                result.add_component(name);
            }
        }
        "decorated_definition" => {
            if let Some(definition) = node.child_by_field_name("definition") {
                collect_declaration(definition, content, result);
            }
        }
        "expression_statement" => {
            let mut cursor = node.walk();
            for expr in node.named_children(&mut cursor) {
                if expr.kind() != "assignment" {
                    continue;
                }
                if let Some(left) = expr.child_by_field_name("left")
                    && left.kind() == "identifier"
                {
                    result.add_component(get_node_text(left, content));
                }
            }
        }
        _ => {}
    }
}
