//! Report Generation
//!
//! - [`Summary`]: counts over the annotated tree
//! - [`write_json`]: timestamped JSON report on disk
//! - [`ConsoleTree`]: indented tree for the terminal

mod console;
mod json;
mod summary;

pub use console::ConsoleTree;
pub use json::{report_file_name, write_json};
pub use summary::{ClassificationSummary, Summary, SymbolSummary};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analyzer::AnalysisMode;
use crate::types::TreeNode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl Default for ToolInfo {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Complete result of one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub tool: ToolInfo,
    pub mode: AnalysisMode,
    /// Absolute path of the walked root
    pub root: PathBuf,
    pub summary: Summary,
    pub tree: TreeNode,
}

impl Report {
    pub fn new(mode: AnalysisMode, root: PathBuf, summary: Summary, tree: TreeNode) -> Self {
        Self {
            generated_at: Utc::now(),
            tool: ToolInfo::default(),
            mode,
            root,
            summary,
            tree,
        }
    }
}
