//! Analysis Commands
//!
//! Usage:
//!   confscope classify [PATH]
//!   confscope scan [PATH]
//!   confscope analyze [PATH]
//!
//! Shared flags override the resolved configuration for this run only.

use std::path::PathBuf;
use tracing::debug;

use crate::analyzer::{self, AnalysisMode};
use crate::cli::ui::Output;
use crate::config::{Config, ConfigLoader};
use crate::report::{ConsoleTree, Report, write_json};
use crate::types::Result;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub path: PathBuf,
    pub mode: AnalysisMode,
    pub output: Option<PathBuf>,
    pub no_tree: bool,
    pub no_report: bool,
    pub max_depth: Option<usize>,
    pub hidden: bool,
    pub gitignore: bool,
    pub compact: bool,
    pub quiet: bool,
}

impl RunOptions {
    /// Layer command-line flags over the loaded configuration
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(output) = &self.output {
            config.report.output_dir = output.clone();
        }
        if self.max_depth.is_some() {
            config.walker.max_depth = self.max_depth;
        }
        if self.hidden {
            config.walker.include_hidden = true;
        }
        if self.gitignore {
            config.walker.respect_gitignore = true;
        }
        if self.compact {
            config.report.pretty = false;
        }
        if self.no_tree {
            config.report.console = false;
        }
        if self.no_report {
            config.report.json = false;
        }
        config.validate()
    }
}

pub fn run(options: RunOptions) -> Result<()> {
    let out = Output::new().quiet(options.quiet);

    let mut config = ConfigLoader::load_for(&options.path)?;
    options.apply(&mut config)?;
    debug!("Effective config: {:?}", config);

    let report = analyzer::analyze(&options.path, options.mode, &config)?;

    if config.report.console {
        let tree = ConsoleTree::new()
            .with_max_depth(config.report.max_console_depth)
            .render(&report.tree);
        out.block(&tree);
    }

    print_summary(&out, &report);

    if config.report.json {
        let path = write_json(&report, &config.report.output_dir, config.report.pretty)?;
        out.success(&format!("Report written to {}", path.display()));
    }

    Ok(())
}

fn print_summary(out: &Output, report: &Report) {
    let summary = &report.summary;

    out.section(&format!("Summary ({})", report.mode));
    out.field("Root", report.root.display());
    out.field("Directories", summary.directories);
    out.field("Files", summary.files);

    if let Some(c) = &summary.classification {
        out.field("Classified", c.classified);
        for (provenance, count) in &c.by_provenance {
            out.field(&format!("  {}", provenance), count);
        }
    }

    if let Some(s) = &summary.symbols {
        out.field("Source files", s.source_files);
        for (status, count) in &s.by_status {
            out.field(&format!("  {}", status), count);
        }
        out.field("Imports", s.imports);
        out.field("Re-exports", s.reexports);
        out.field("Components", s.components);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::fs;

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        let options = RunOptions {
            output: Some(PathBuf::from("out")),
            max_depth: Some(3),
            hidden: true,
            gitignore: true,
            compact: true,
            no_tree: true,
            no_report: true,
            ..Default::default()
        };
        options.apply(&mut config).unwrap();

        assert_eq!(config.report.output_dir, PathBuf::from("out"));
        assert_eq!(config.walker.max_depth, Some(3));
        assert!(config.walker.include_hidden);
        assert!(config.walker.respect_gitignore);
        assert!(!config.report.pretty);
        assert!(!config.report.console);
        assert!(!config.report.json);
    }

    #[test]
    fn test_unset_flags_keep_config() {
        let mut config = Config::default();
        config.walker.max_depth = Some(5);
        RunOptions::default().apply(&mut config).unwrap();

        assert_eq!(config.walker.max_depth, Some(5));
        assert!(config.report.json);
        assert!(config.report.pretty);
    }

    #[test]
    fn test_zero_depth_flag_rejected() {
        let mut config = Config::default();
        let options = RunOptions {
            max_depth: Some(0),
            ..Default::default()
        };
        assert!(options.apply(&mut config).is_err());
    }

    #[test]
    fn test_run_writes_report() {
        Jail::expect_with(|jail| {
            let xdg = jail.directory().join("xdg");
            jail.set_env("XDG_CONFIG_HOME", xdg.display());

            let project = jail.directory().join("project");
            fs::create_dir_all(&project).map_err(|e| e.to_string())?;
            fs::write(project.join("package.json"), "{}").map_err(|e| e.to_string())?;
            let out_dir = jail.directory().join("out");

            run(RunOptions {
                path: project,
                mode: AnalysisMode::Full,
                output: Some(out_dir.clone()),
                no_tree: true,
                quiet: true,
                ..Default::default()
            })
            .map_err(|e| e.to_string())?;

            let written: Vec<_> = fs::read_dir(&out_dir)
                .map_err(|e| e.to_string())?
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect();
            assert_eq!(written.len(), 1);
            assert!(written[0].starts_with("full-report-"));
            Ok(())
        });
    }

    #[test]
    fn test_run_honors_project_config() {
        Jail::expect_with(|jail| {
            let xdg = jail.directory().join("xdg");
            jail.set_env("XDG_CONFIG_HOME", xdg.display());

            fs::create_dir_all(jail.directory().join(".confscope")).map_err(|e| e.to_string())?;
            jail.create_file(".confscope/config.toml", "[report]\njson = false\n")?;
            jail.create_file("package.json", "{}")?;

            run(RunOptions {
                path: jail.directory().to_path_buf(),
                mode: AnalysisMode::Classify,
                no_tree: true,
                quiet: true,
                ..Default::default()
            })
            .map_err(|e| e.to_string())?;

            assert!(!jail.directory().join(".confscope/reports").exists());
            Ok(())
        });
    }
}
