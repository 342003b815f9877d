//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/confscope/config.toml)
//! 3. Project config (<root>/.confscope/config.toml)
//! 4. Environment variables (CONFSCOPE_* prefix, `__` separates sections)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::constants::paths;
use crate::types::{ConfscopeError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for the current directory
    pub fn load() -> Result<Config> {
        Self::load_for(Path::new("."))
    }

    /// Load configuration with full resolution chain using Figment:
    /// defaults → global → project (under `root`) → env vars
    pub fn load_for(root: &Path) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        let project_path = Self::project_config_path(root);
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // CONFSCOPE_REPORT__OUTPUT_DIR -> report.output_dir
        figment = figment.merge(Env::prefixed(paths::ENV_PREFIX).split("__"));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfscopeError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Global config directory; `$XDG_CONFIG_HOME` wins over the platform default
    pub fn global_dir() -> Option<PathBuf> {
        env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| directories::BaseDirs::new().map(|b| b.config_dir().to_path_buf()))
            .map(|p| p.join(paths::APP_NAME))
    }

    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join(paths::CONFIG_FILE))
    }

    pub fn project_dir(root: &Path) -> PathBuf {
        root.join(paths::PROJECT_DIR)
    }

    pub fn project_config_path(root: &Path) -> PathBuf {
        Self::project_dir(root).join(paths::CONFIG_FILE)
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    pub fn show_path(root: &Path) {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = Self::project_config_path(root);
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());
    }

    /// Show current effective configuration
    pub fn show_config(root: &Path, as_json: bool) -> Result<()> {
        let config = Self::load_for(root)?;

        if as_json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(&config)
                    .map_err(|e| ConfscopeError::Config(e.to_string()))?
            );
        }

        Ok(())
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Write the global config file; an existing file is kept unless `force`
    pub fn init_global(force: bool) -> Result<PathBuf> {
        let global_dir = Self::global_dir().ok_or_else(|| {
            ConfscopeError::Config("Cannot determine global config directory".to_string())
        })?;

        fs::create_dir_all(&global_dir)?;

        let config_path = global_dir.join(paths::CONFIG_FILE);
        Self::write_config(&config_path, Self::default_global_config(), force)?;

        Ok(config_path)
    }

    /// Write `<root>/.confscope/config.toml`; an existing file is kept unless `force`
    pub fn init_project(root: &Path, force: bool) -> Result<PathBuf> {
        let project_dir = Self::project_dir(root);
        fs::create_dir_all(&project_dir)?;

        let config_path = project_dir.join(paths::CONFIG_FILE);
        Self::write_config(&config_path, Self::default_project_config(), force)?;

        Ok(config_path)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn write_config(path: &Path, content: &str, force: bool) -> Result<()> {
        if path.exists() && !force {
            info!("Config exists: {}", path.display());
            return Ok(());
        }
        fs::write(path, content)?;
        info!("Created config: {}", path.display());
        Ok(())
    }

    fn default_global_config() -> &'static str {
        r#"# confscope global configuration
# User-wide defaults. Project settings in .confscope/config.toml override these.

version = "1.0"

[report]
pretty = true
console = true
"#
    }

    fn default_project_config() -> &'static str {
        r#"# confscope project configuration
# Project-specific settings that override global defaults.

version = "1.0"

[walker]
include_hidden = false
respect_gitignore = false
skip_dirs = [
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
]

[scan]
max_file_size = 1048576

[report]
output_dir = ".confscope/reports"

# Extra classification rules, checked before the built-in tables.
# [[classifier.files]]
# name = "turbo.json"
# provenance = "framework-tool"
# label = "Turborepo pipeline"
#
# [[classifier.directories]]
# contains = "infra"
# provenance = "custom"
# label = "Infrastructure code"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use tempfile::TempDir;

    fn isolate_global(jail: &mut Jail) {
        let xdg = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", xdg.display());
    }

    #[test]
    fn test_load_default_config() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            let config = ConfigLoader::load().map_err(|e| e.to_string())?;
            assert_eq!(config.version, "1.0");
            assert!(config.report.json);
            Ok(())
        });
    }

    #[test]
    fn test_layering_global_project_env() {
        Jail::expect_with(|jail| {
            isolate_global(jail);

            let global_dir = jail.directory().join("xdg").join("confscope");
            fs::create_dir_all(&global_dir).map_err(|e| e.to_string())?;
            fs::write(
                global_dir.join("config.toml"),
                "[walker]\ninclude_hidden = true\nmax_depth = 4\n[report]\npretty = false\n",
            )
            .map_err(|e| e.to_string())?;

            fs::create_dir_all(jail.directory().join(".confscope")).map_err(|e| e.to_string())?;
            jail.create_file(".confscope/config.toml", "[walker]\nmax_depth = 2\n")?;

            jail.set_env("CONFSCOPE_REPORT__OUTPUT_DIR", "custom-out");

            let config = ConfigLoader::load().map_err(|e| e.to_string())?;
            assert!(config.walker.include_hidden);
            assert_eq!(config.walker.max_depth, Some(2));
            assert!(!config.report.pretty);
            assert_eq!(config.report.output_dir, PathBuf::from("custom-out"));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_rejected() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.set_env("CONFSCOPE_SCAN__MAX_FILE_SIZE", "0");

            let err = ConfigLoader::load().unwrap_err();
            assert!(err.to_string().contains("max_file_size"));
            Ok(())
        });
    }

    #[test]
    fn test_init_project_writes_loadable_config() {
        Jail::expect_with(|jail| {
            isolate_global(jail);

            let path = ConfigLoader::init_project(jail.directory(), false)
                .map_err(|e| e.to_string())?;
            assert_eq!(path, jail.directory().join(".confscope/config.toml"));

            let config = ConfigLoader::load_for(jail.directory()).map_err(|e| e.to_string())?;
            assert_eq!(config.scan.max_file_size, 1_048_576);
            assert!(config.walker.skip_dirs.contains(&"node_modules".to_string()));
            Ok(())
        });
    }

    #[test]
    fn test_init_project_keeps_existing_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join(".confscope");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "version = \"9\"\n").unwrap();

        ConfigLoader::init_project(temp_dir.path(), false).unwrap();
        let content = fs::read_to_string(dir.join("config.toml")).unwrap();
        assert_eq!(content, "version = \"9\"\n");

        ConfigLoader::init_project(temp_dir.path(), true).unwrap();
        let content = fs::read_to_string(dir.join("config.toml")).unwrap();
        assert!(content.contains("[walker]"));
    }
}
