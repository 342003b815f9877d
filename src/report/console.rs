use console::style;
use std::fmt::Write;

use crate::constants::report::ELIDED_MARKER;
use crate::types::{FileSymbols, ScanStatus, TreeNode};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Renders an annotated tree with box-drawing guides.
///
/// ```text
/// app/
/// ├── src/
/// │   └── App.tsx  (1 import, 1 component)
/// └── package.json  [package-manager] npm package manifest
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConsoleTree {
    max_depth: Option<usize>,
}

impl ConsoleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Levels below `depth` are collapsed into a single marker line
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn render(&self, tree: &TreeNode) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", node_line(tree));
        self.render_children(tree, "", 1, &mut out);
        out
    }

    fn render_children(&self, node: &TreeNode, prefix: &str, depth: usize, out: &mut String) {
        if node.children.is_empty() {
            return;
        }
        if self.max_depth.is_some_and(|max| depth > max) {
            let _ = writeln!(
                out,
                "{}{}{}",
                prefix,
                LAST_BRANCH,
                style(ELIDED_MARKER).dim()
            );
            return;
        }

        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            let last = i + 1 == count;
            let branch = if last { LAST_BRANCH } else { BRANCH };
            let _ = writeln!(out, "{}{}{}", prefix, branch, node_line(child));

            let child_prefix = format!("{}{}", prefix, if last { SPACE } else { PIPE });
            self.render_children(child, &child_prefix, depth + 1, out);
        }
    }
}

fn node_line(node: &TreeNode) -> String {
    let mut line = if node.is_dir() {
        style(format!("{}/", node.name)).bold().blue().to_string()
    } else {
        node.name.clone()
    };
    if node.symlink {
        let _ = write!(line, " {}", style("(symlink)").dim());
    }

    if let Some(c) = &node.classification {
        let _ = write!(
            line,
            "  {} {}",
            style(format!("[{}]", c.provenance)).cyan(),
            c.label
        );
    }
    if let Some(s) = &node.symbols {
        let _ = write!(line, "  {}", symbol_note(s));
    }

    line
}

fn symbol_note(symbols: &FileSymbols) -> String {
    match symbols.status {
        ScanStatus::Skipped => style("(skipped)").yellow().to_string(),
        ScanStatus::Failed => style("(scan failed)").red().to_string(),
        ScanStatus::Parsed | ScanStatus::Partial => {
            let mut parts = Vec::new();
            push_count(&mut parts, symbols.imports.len(), "import", "imports");
            push_count(&mut parts, symbols.reexports.len(), "re-export", "re-exports");
            push_count(&mut parts, symbols.components.len(), "component", "components");
            if symbols.status == ScanStatus::Partial {
                parts.push("partial".to_string());
            }
            if parts.is_empty() {
                parts.push("no symbols".to_string());
            }
            style(format!("({})", parts.join(", "))).dim().to_string()
        }
    }
}

fn push_count(parts: &mut Vec<String>, n: usize, singular: &str, plural: &str) {
    match n {
        0 => {}
        1 => parts.push(format!("1 {}", singular)),
        _ => parts.push(format!("{} {}", n, plural)),
    }
}
