//! Config Command
//!
//! Manage confscope configuration.
//!
//! Usage:
//!   confscope config show [-g] [-f json]
//!   confscope config path
//!   confscope config init [-g] [--force]

use std::fs;
use std::path::Path;

use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::types::{ConfscopeError, Result};

/// Show the merged configuration, or the raw global file with `global`
pub fn show(root: &Path, global: bool, format: &str) -> Result<()> {
    let as_json = match format {
        "json" => true,
        "text" | "toml" => false,
        other => {
            return Err(ConfscopeError::Config(format!(
                "Invalid format '{}'. Valid values: text, json",
                other
            )));
        }
    };

    if !global {
        return ConfigLoader::show_config(root, as_json);
    }

    let out = Output::new();
    match ConfigLoader::global_config_path() {
        Some(path) if path.exists() => {
            let content = fs::read_to_string(&path)?;
            println!("# Global Config: {}\n", path.display());
            println!("{}", content);
        }
        Some(_) => {
            out.warning("No global config found.");
            out.info("Run 'confscope config init --global' to create one.");
        }
        None => out.warning("Cannot determine global config directory."),
    }
    Ok(())
}

pub fn path(root: &Path) -> Result<()> {
    ConfigLoader::show_path(root);
    Ok(())
}

pub fn init(root: &Path, global: bool, force: bool) -> Result<()> {
    let out = Output::new();

    let existed = if global {
        ConfigLoader::global_config_path().is_some_and(|p| p.exists())
    } else {
        ConfigLoader::project_config_path(root).exists()
    };

    let (scope, config_path) = if global {
        ("global", ConfigLoader::init_global(force)?)
    } else {
        ("project", ConfigLoader::init_project(root, force)?)
    };

    if existed && !force {
        out.info(&format!(
            "The {} configuration already exists (use --force to overwrite)",
            scope
        ));
    } else {
        out.success(&format!("Initialized {} configuration", scope));
    }
    out.field("Config", config_path.display());
    Ok(())
}
