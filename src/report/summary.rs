use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analyzer::AnalysisMode;
use crate::types::{Provenance, ScanStatus, TreeNode};

/// Counts over an annotated tree.
///
/// The classification and symbol sections are present only for the modes
/// that produce them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Directories below the root
    pub directories: usize,
    pub files: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<ClassificationSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbols: Option<SymbolSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    pub classified: usize,
    pub by_provenance: BTreeMap<Provenance, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSummary {
    pub source_files: usize,
    pub by_status: BTreeMap<ScanStatus, usize>,
    pub imports: usize,
    pub reexports: usize,
    pub components: usize,
}

impl Summary {
    pub fn from_tree(tree: &TreeNode, mode: AnalysisMode) -> Self {
        let mut summary = Summary::default();
        let mut classification = ClassificationSummary::default();
        let mut symbols = SymbolSummary::default();

        for node in tree.iter().skip(1) {
            if node.is_dir() {
                summary.directories += 1;
            } else {
                summary.files += 1;
            }

            if let Some(c) = &node.classification {
                classification.classified += 1;
                *classification.by_provenance.entry(c.provenance).or_default() += 1;
            }

            if let Some(s) = &node.symbols {
                symbols.source_files += 1;
                *symbols.by_status.entry(s.status).or_default() += 1;
                symbols.imports += s.imports.len();
                symbols.reexports += s.reexports.len();
                symbols.components += s.components.len();
            }
        }

        summary.classification = mode.classifies().then_some(classification);
        summary.symbols = mode.scans().then_some(symbols);
        summary
    }
}
