//! Project Analyzer Module
//!
//! One walk produces the project tree; annotators then visit every node:
//! - Classifier: known configuration files and directories
//! - Symbol scanner: imports, re-exports and component names in source files

pub mod classifier;
pub mod parser;
pub mod scanner;
pub mod symbol_scanner;

pub use classifier::Classifier;
pub use scanner::TreeWalker;
pub use symbol_scanner::SymbolScanner;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::constants::walker::ROOT_PATH;
use crate::report::{Report, Summary};
use crate::types::{Result, TreeNode};

/// A pass that attaches findings to tree nodes
pub trait Annotator {
    fn name(&self) -> &'static str;

    /// `path` is the node's location on disk
    fn annotate(&self, node: &mut TreeNode, path: &Path);
}

/// Run every annotator over every node, parents before children
pub fn annotate_tree(root: &Path, tree: &mut TreeNode, annotators: &[&dyn Annotator]) {
    let path = if tree.path == ROOT_PATH {
        root.to_path_buf()
    } else {
        root.join(&tree.path)
    };

    for annotator in annotators {
        annotator.annotate(tree, &path);
    }
    for child in &mut tree.children {
        annotate_tree(root, child, annotators);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Known-config classification only
    #[default]
    Classify,
    /// Source symbol scan only
    Scan,
    /// Both passes over the same tree
    Full,
}

impl AnalysisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Classify => "classify",
            AnalysisMode::Scan => "scan",
            AnalysisMode::Full => "full",
        }
    }

    pub fn classifies(&self) -> bool {
        matches!(self, AnalysisMode::Classify | AnalysisMode::Full)
    }

    pub fn scans(&self) -> bool {
        matches!(self, AnalysisMode::Scan | AnalysisMode::Full)
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Walk `root`, run the passes selected by `mode` and summarize.
pub fn analyze(root: &Path, mode: AnalysisMode, config: &Config) -> Result<Report> {
    info!("Walking {}", root.display());
    let mut tree = TreeWalker::new(root, &config.walker).walk()?;
    let abs_root = root.canonicalize()?;

    let classifier = mode.classifies().then(|| Classifier::new(&config.classifier));
    let scanner = mode.scans().then(|| SymbolScanner::new(&config.scan));

    let mut annotators: Vec<&dyn Annotator> = Vec::new();
    if let Some(c) = &classifier {
        annotators.push(c);
    }
    if let Some(s) = &scanner {
        annotators.push(s);
    }

    for annotator in &annotators {
        info!("Running {}", annotator.name());
    }
    annotate_tree(root, &mut tree, &annotators);

    let summary = Summary::from_tree(&tree, mode);
    info!(
        "Analyzed {} directories and {} files",
        summary.directories, summary.files
    );

    Ok(Report::new(mode, abs_root, summary, tree))
}
