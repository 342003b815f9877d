//! Configuration Types
//!
//! All configuration structures with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants;
use crate::types::{ConfscopeError, Provenance, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Directory traversal settings
    pub walker: WalkerConfig,

    /// Extra classification rules
    pub classifier: ClassifierConfig,

    /// Source scanning settings
    pub scan: ScanConfig,

    /// Console and JSON output settings
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            walker: WalkerConfig::default(),
            classifier: ClassifierConfig::default(),
            scan: ScanConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<()> {
        if self.walker.max_depth == Some(0) {
            return Err(ConfscopeError::Config(
                "walker.max_depth must be greater than 0".to_string(),
            ));
        }

        if self.scan.max_file_size == 0 {
            return Err(ConfscopeError::Config(
                "scan.max_file_size must be greater than 0".to_string(),
            ));
        }

        if self.report.output_dir.as_os_str().is_empty() {
            return Err(ConfscopeError::Config(
                "report.output_dir must not be empty".to_string(),
            ));
        }

        if self.report.max_console_depth == Some(0) {
            return Err(ConfscopeError::Config(
                "report.max_console_depth must be greater than 0".to_string(),
            ));
        }

        for rule in &self.classifier.files {
            if rule.name.is_empty() {
                return Err(ConfscopeError::Config(
                    "classifier.files entries need a non-empty name".to_string(),
                ));
            }
            if let Err(e) = glob::Pattern::new(&rule.name) {
                return Err(ConfscopeError::Config(format!(
                    "classifier.files pattern '{}' is invalid: {}",
                    rule.name, e
                )));
            }
        }

        if self.classifier.directories.iter().any(|r| r.contains.is_empty()) {
            return Err(ConfscopeError::Config(
                "classifier.directories entries need a non-empty 'contains'".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Walker Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Directory names never descended into
    pub skip_dirs: Vec<String>,

    /// Walk entries whose name starts with '.'
    pub include_hidden: bool,

    /// Honor .gitignore / .ignore files
    pub respect_gitignore: bool,

    /// Maximum depth below the root (unlimited when unset)
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            skip_dirs: constants::walker::DEFAULT_SKIP_DIRS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            include_hidden: false,
            respect_gitignore: false,
            max_depth: None,
        }
    }
}

// =============================================================================
// Classifier Configuration
// =============================================================================

/// User rules, checked before the built-in tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub files: Vec<FileRule>,
    pub directories: Vec<DirectoryRule>,
}

/// Matches a file by exact name or glob pattern (`*.schema.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRule {
    pub name: String,
    #[serde(default = "custom_provenance")]
    pub provenance: Provenance,
    pub label: String,
}

/// Matches a directory whose name contains `contains` (case-insensitive)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRule {
    pub contains: String,
    #[serde(default = "custom_provenance")]
    pub provenance: Provenance,
    pub label: String,
}

fn custom_provenance() -> Provenance {
    Provenance::Custom
}

// =============================================================================
// Scan Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Files above this size (bytes) are reported as skipped
    pub max_file_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_file_size: constants::scan::DEFAULT_MAX_FILE_SIZE,
        }
    }
}

// =============================================================================
// Report Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory receiving timestamped JSON reports
    pub output_dir: PathBuf,

    /// Write the JSON report
    pub json: bool,

    /// Pretty-print the JSON report
    pub pretty: bool,

    /// Print the tree to the console
    pub console: bool,

    /// Depth cap for the console tree (the JSON is never capped)
    pub max_console_depth: Option<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(constants::report::DEFAULT_OUTPUT_DIR),
            json: true,
            pretty: true,
            console: true,
            max_console_depth: None,
        }
    }
}
