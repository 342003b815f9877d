//! confscope - Project Configuration Mapper
//!
//! Walks a project tree, tags known configuration files and directories with
//! their provenance, optionally scans source files for imports, re-exports
//! and component names, and reports the result as a console tree and a
//! timestamped JSON file.
//!
//! ## Quick Start
//!
//! ```ignore
//! use confscope::{AnalysisMode, Config, analyze, write_json};
//!
//! let config = Config::default();
//! let report = analyze(Path::new("."), AnalysisMode::Full, &config)?;
//! let path = write_json(&report, &config.report.output_dir, true)?;
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: tree walker, classifier, tree-sitter symbol scanner
//! - [`report`]: summary counts, JSON and console output
//! - [`config`]: layered configuration
//! - [`types`]: tree nodes, annotations, errors

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod report;
pub mod types;

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{ConfscopeError, Result, ResultExt};

// Analysis
pub use analyzer::{
    AnalysisMode, Annotator, Classifier, SymbolScanner, TreeWalker, analyze, annotate_tree,
    parser::{Language, ParseResult, Parser},
};

// Reporting
pub use report::{ConsoleTree, Report, Summary, write_json};

// Data model
pub use types::{Classification, FileSymbols, NodeKind, Provenance, ScanStatus, TreeNode};
