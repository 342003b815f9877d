//! Known-configuration classifier.
//!
//! Files are matched by user rules, then the exact-name table, then the
//! name-pattern table. Directories are matched by user rules, then the
//! substring table. The walked root is never classified.

pub mod tables;

use glob::Pattern;
use std::path::Path;
use tracing::warn;

use super::Annotator;
use crate::config::{ClassifierConfig, DirectoryRule, FileRule};
use crate::constants::walker::ROOT_PATH;
use crate::types::{Classification, MatchKind, NodeKind, Provenance, TreeNode};
use tables::{DIRECTORY_SUBSTRINGS, FILE_PATTERNS, KNOWN_FILES};

struct CompiledPattern {
    source: &'static str,
    pattern: Pattern,
    provenance: Provenance,
    label: &'static str,
}

pub struct Classifier {
    patterns: Vec<CompiledPattern>,
    user_files: Vec<(Option<Pattern>, FileRule)>,
    user_dirs: Vec<DirectoryRule>,
}

impl Classifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        let patterns = FILE_PATTERNS
            .iter()
            .filter_map(|(source, provenance, label)| match Pattern::new(source) {
                Ok(pattern) => Some(CompiledPattern {
                    source: *source,
                    pattern,
                    provenance: *provenance,
                    label: *label,
                }),
                Err(e) => {
                    warn!("Ignoring invalid built-in pattern {}: {}", source, e);
                    None
                }
            })
            .collect();

        let user_files = config
            .files
            .iter()
            .map(|rule| (Pattern::new(&rule.name).ok(), rule.clone()))
            .collect();

        let user_dirs = config
            .directories
            .iter()
            .map(|rule| DirectoryRule {
                contains: rule.contains.to_lowercase(),
                ..rule.clone()
            })
            .collect();

        Self {
            patterns,
            user_files,
            user_dirs,
        }
    }

    pub fn classify(&self, name: &str, kind: NodeKind) -> Option<Classification> {
        match kind {
            NodeKind::File => self.classify_file(name),
            NodeKind::Directory => self.classify_directory(name),
        }
    }

    fn classify_file(&self, name: &str) -> Option<Classification> {
        for (pattern, rule) in &self.user_files {
            let hit = rule.name == name || pattern.as_ref().is_some_and(|p| p.matches(name));
            if hit {
                return Some(Classification::new(
                    rule.provenance,
                    rule.label.clone(),
                    rule.name.clone(),
                    MatchKind::UserRule,
                ));
            }
        }

        if let Some((key, provenance, label)) = KNOWN_FILES.iter().find(|(key, _, _)| *key == name)
        {
            return Some(Classification::new(
                *provenance,
                *label,
                *key,
                MatchKind::ExactName,
            ));
        }

        self.patterns
            .iter()
            .find(|p| p.pattern.matches(name))
            .map(|p| Classification::new(p.provenance, p.label, p.source, MatchKind::NamePattern))
    }

    fn classify_directory(&self, name: &str) -> Option<Classification> {
        let lower = name.to_lowercase();

        if let Some(rule) = self.user_dirs.iter().find(|r| lower.contains(&r.contains)) {
            return Some(Classification::new(
                rule.provenance,
                rule.label.clone(),
                rule.contains.clone(),
                MatchKind::UserRule,
            ));
        }

        DIRECTORY_SUBSTRINGS
            .iter()
            .find(|(needle, _, _)| lower.contains(needle))
            .map(|(needle, provenance, label)| {
                Classification::new(
                    *provenance,
                    *label,
                    *needle,
                    MatchKind::DirectorySubstring,
                )
            })
    }
}

impl Default for Classifier {
    /// Built-in tables only
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

impl Annotator for Classifier {
    fn name(&self) -> &'static str {
        "classifier"
    }

    fn annotate(&self, node: &mut TreeNode, _path: &Path) {
        if node.path == ROOT_PATH {
            return;
        }
        node.classification = self.classify(&node.name, node.kind);
    }
}
