use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::Annotator;
use super::parser::{Language, Parser, create_parser};
use crate::config::ScanConfig;
use crate::types::{FileSymbols, ScanStatus, TreeNode};

/// Annotates source files with the names their lexical scan turns up.
///
/// Files whose extension maps to no known language are left untouched.
pub struct SymbolScanner {
    parsers: HashMap<Language, Box<dyn Parser>>,
    max_file_size: u64,
}

impl SymbolScanner {
    pub fn new(config: &ScanConfig) -> Self {
        let mut parsers = HashMap::new();
        for language in Language::all_variants() {
            match create_parser(*language) {
                Ok(parser) => {
                    parsers.insert(*language, parser);
                }
                Err(e) => warn!("No scanner for {}: {}", language, e),
            }
        }

        Self {
            parsers,
            max_file_size: config.max_file_size,
        }
    }

    /// Scan one file on disk; symbolic links are not read
    pub fn scan_file(&self, path: &Path, language: Language) -> FileSymbols {
        let shown = path.display().to_string();

        let size = match fs::symlink_metadata(path) {
            Ok(meta) if meta.file_type().is_symlink() => {
                debug!("Not scanning symlink {}", shown);
                return FileSymbols::unscanned(language, ScanStatus::Skipped, "symbolic link");
            }
            Ok(meta) => meta.len(),
            Err(e) => {
                warn!("Cannot stat {}: {}", shown, e);
                return FileSymbols::unscanned(language, ScanStatus::Failed, e.to_string());
            }
        };
        if size > self.max_file_size {
            debug!("Skipping oversized file {} ({} bytes)", shown, size);
            return FileSymbols::unscanned(
                language,
                ScanStatus::Skipped,
                format!(
                    "file is {} bytes, limit is {} bytes",
                    size, self.max_file_size
                ),
            );
        }

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Cannot read {}: {}", shown, e);
                return FileSymbols::unscanned(language, ScanStatus::Failed, e.to_string());
            }
        };
        let content = String::from_utf8_lossy(&bytes);

        self.scan_source(&shown, &content, language)
    }

    /// Scan in-memory source text
    pub fn scan_source(&self, path: &str, content: &str, language: Language) -> FileSymbols {
        let Some(parser) = self.parsers.get(&language) else {
            return FileSymbols::unscanned(language, ScanStatus::Failed, "parser unavailable");
        };

        match parser.parse(path, content) {
            Ok(result) => {
                if result.has_errors {
                    debug!("Syntax errors in {}, names may be incomplete", path);
                }
                result.into_symbols(language)
            }
            Err(e) => {
                warn!("{}", e);
                FileSymbols::unscanned(language, ScanStatus::Failed, e.to_string())
            }
        }
    }
}

impl Annotator for SymbolScanner {
    fn name(&self) -> &'static str {
        "symbol-scanner"
    }

    fn annotate(&self, node: &mut TreeNode, path: &Path) {
        if !node.is_file() || node.symlink {
            return;
        }
        let language = Language::from_path(&node.name);
        if !language.has_parser_support() {
            return;
        }
        node.symbols = Some(self.scan_file(path, language));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scanner() -> SymbolScanner {
        SymbolScanner::new(&ScanConfig::default())
    }

    #[test]
    fn test_scan_tsx_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("App.tsx");
        fs::write(
            &path,
            "import React from 'react';\nexport * from './hooks';\nexport default function App() { return <div/>; }\n",
        )
        .unwrap();

        let symbols = scanner().scan_file(&path, Language::Tsx);
        assert_eq!(symbols.status, ScanStatus::Parsed);
        assert_eq!(symbols.imports, vec!["react"]);
        assert_eq!(symbols.reexports, vec!["./hooks"]);
        assert_eq!(symbols.components, vec!["App"]);
        assert!(symbols.message.is_none());
    }

    #[test]
    fn test_oversized_file_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.py");
        fs::write(&path, "class Big:\n    pass\n").unwrap();

        let scanner = SymbolScanner::new(&ScanConfig { max_file_size: 4 });
        let symbols = scanner.scan_file(&path, Language::Python);
        assert_eq!(symbols.status, ScanStatus::Skipped);
        assert!(symbols.is_empty());
        assert!(symbols.message.unwrap().contains("limit"));
    }

    #[test]
    fn test_missing_file_failed() {
        let dir = TempDir::new().unwrap();
        let symbols = scanner().scan_file(&dir.path().join("gone.rs"), Language::Rust);
        assert_eq!(symbols.status, ScanStatus::Failed);
        assert!(symbols.message.is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_source_not_read() {
        let outside = TempDir::new().unwrap();
        let target = outside.path().join("secret.py");
        fs::write(&target, "class Leaked:\n    pass\n").unwrap();

        let dir = TempDir::new().unwrap();
        let link = dir.path().join("ext.py");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let symbols = scanner().scan_file(&link, Language::Python);
        assert_eq!(symbols.status, ScanStatus::Skipped);
        assert!(symbols.components.is_empty());

        let mut node = TreeNode::symlink("ext.py", "ext.py", false);
        scanner().annotate(&mut node, &link);
        assert!(node.symbols.is_none());
    }

    #[test]
    fn test_syntax_errors_are_partial() {
        let symbols = scanner().scan_source(
            "broken.py",
            "import os\nclass Widget(:\n",
            Language::Python,
        );
        assert_eq!(symbols.status, ScanStatus::Partial);
        assert_eq!(symbols.imports, vec!["os"]);
    }

    #[test]
    fn test_annotate_only_known_source_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("lib.rs"), "pub struct Engine;\n").unwrap();
        fs::write(dir.path().join("notes.md"), "# Notes\n").unwrap();

        let scanner = scanner();

        let mut rs = TreeNode::file("lib.rs", "lib.rs", 19);
        scanner.annotate(&mut rs, &dir.path().join("lib.rs"));
        let symbols = rs.symbols.unwrap();
        assert_eq!(symbols.language, Language::Rust);
        assert_eq!(symbols.components, vec!["Engine"]);

        let mut md = TreeNode::file("notes.md", "notes.md", 8);
        scanner.annotate(&mut md, &dir.path().join("notes.md"));
        assert!(md.symbols.is_none());

        let mut d = TreeNode::directory("src.rs", "src.rs");
        scanner.annotate(&mut d, dir.path());
        assert!(d.symbols.is_none());
    }
}
