use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Classification, FileSymbols};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Directory => "directory",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of the walked project tree.
///
/// `path` is relative to the walked root and always `/`-separated; the root
/// itself is `"."`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbols: Option<FileSymbols>,
    /// The entry is a symbolic link; its target is never read or descended into
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub symlink: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Creates a directory node with no children
    pub fn directory(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::Directory,
            size: None,
            extension: None,
            classification: None,
            symbols: None,
            symlink: false,
            children: Vec::new(),
        }
    }

    /// Creates a file node; the extension is derived from the name
    pub fn file(name: impl Into<String>, path: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        let extension = std::path::Path::new(&name)
            .extension()
            .and_then(|e| e.to_str())
            .map(String::from);

        Self {
            name,
            path: path.into(),
            kind: NodeKind::File,
            size: Some(size),
            extension,
            classification: None,
            symbols: None,
            symlink: false,
            children: Vec::new(),
        }
    }

    /// Creates a node for a symbolic link. `points_to_dir` picks the kind so
    /// a linked directory still classifies as one; no size is recorded.
    pub fn symlink(name: impl Into<String>, path: impl Into<String>, points_to_dir: bool) -> Self {
        let mut node = if points_to_dir {
            Self::directory(name, path)
        } else {
            Self::file(name, path, 0)
        };
        node.size = None;
        node.symlink = true;
        node
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    /// Directories first, then files; each group ordered by name.
    pub fn sort_recursive(&mut self) {
        self.children.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.name.cmp(&b.name),
        });
        for child in &mut self.children {
            child.sort_recursive();
        }
    }

    /// Pre-order iterator over this node and all descendants
    pub fn iter(&self) -> TreeIter<'_> {
        TreeIter { stack: vec![self] }
    }

    /// Find a descendant (or self) by its relative path
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        self.iter().find(|n| n.path == path)
    }
}

pub struct TreeIter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for TreeIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        let mut root = TreeNode::directory("app", ".");
        let mut src = TreeNode::directory("src", "src");
        src.children.push(TreeNode::file("main.ts", "src/main.ts", 10));
        root.children.push(TreeNode::file("package.json", "package.json", 42));
        root.children.push(src);
        root.children.push(TreeNode::directory("docs", "docs"));
        root
    }

    #[test]
    fn test_file_extension() {
        let node = TreeNode::file("vite.config.ts", "vite.config.ts", 1);
        assert_eq!(node.extension.as_deref(), Some("ts"));

        let node = TreeNode::file("Makefile", "Makefile", 1);
        assert_eq!(node.extension, None);
    }

    #[test]
    fn test_sort_directories_first() {
        let mut root = sample();
        root.sort_recursive();

        let names: Vec<_> = root.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["docs", "src", "package.json"]);
    }

    #[test]
    fn test_iter_preorder() {
        let mut root = sample();
        root.sort_recursive();

        let paths: Vec<_> = root.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![".", "docs", "src", "src/main.ts", "package.json"]
        );
        assert!(root.find("src/main.ts").is_some());
        assert!(root.find("src/missing.ts").is_none());
    }

    #[test]
    fn test_symlink_node() {
        let link = TreeNode::symlink("components", "src/components", true);
        assert!(link.is_dir());
        assert!(link.symlink);
        assert_eq!(link.size, None);

        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["symlink"], true);

        let plain = serde_json::to_value(TreeNode::file("a.ts", "a.ts", 1)).unwrap();
        assert!(plain.get("symlink").is_none());
    }

    #[test]
    fn test_serialize_shape() {
        let root = sample();
        let json = serde_json::to_value(&root).unwrap();

        assert_eq!(json["type"], "directory");
        assert_eq!(json["children"][0]["type"], "file");
        assert_eq!(json["children"][0]["size"], 42);
        // Empty directories and files carry no children array
        assert!(json["children"][0].get("children").is_none());
        assert!(json["children"][2].get("children").is_none());
        assert!(json.get("classification").is_none());
    }
}
