//! Configuration Management
//!
//! Hierarchical resolution, lowest to highest priority:
//! 1. Built-in defaults
//! 2. Global config (~/.config/confscope/config.toml)
//! 3. Project config (<root>/.confscope/config.toml)
//! 4. Environment variables (CONFSCOPE_*)
//! 5. CLI arguments

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
