//! Global Constants
//!
//! Centralized defaults. Everything here can be overridden through
//! configuration unless noted otherwise.

/// Tree walker constants
pub mod walker {
    /// Dependency and tooling directories skipped by name
    pub const DEFAULT_SKIP_DIRS: &[&str] = &[
        "node_modules",
        "bower_components",
        "jspm_packages",
        "vendor",
        "__pycache__",
        "venv",
        ".venv",
        "site-packages",
        "target",
        ".git",
    ];

    /// Name of the root node's relative path
    pub const ROOT_PATH: &str = ".";
}

/// Lexical scanner constants
pub mod scan {
    /// Files larger than this are not parsed (1MB)
    pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;
}

/// Reporter constants
pub mod report {
    /// Default directory for JSON reports, relative to the working directory
    pub const DEFAULT_OUTPUT_DIR: &str = ".confscope/reports";

    /// Timestamp layout embedded in report file names
    pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

    /// Marker printed in place of subtrees beyond the console depth limit
    pub const ELIDED_MARKER: &str = "…";
}

/// Configuration file locations
pub mod paths {
    /// Project-level data directory
    pub const PROJECT_DIR: &str = ".confscope";

    /// Config file name, both global and project level
    pub const CONFIG_FILE: &str = "config.toml";

    /// Application directory name under the platform config dir
    pub const APP_NAME: &str = "confscope";

    /// Environment variable prefix for config overrides
    pub const ENV_PREFIX: &str = "CONFSCOPE_";
}
