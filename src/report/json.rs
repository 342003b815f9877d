use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use super::Report;
use crate::constants::report::FILE_TIMESTAMP_FORMAT;
use crate::types::{ConfscopeError, Result, ResultExt};

/// Upper bound on collision suffixes tried for one timestamp
const MAX_SUFFIX: usize = 1000;

/// `<mode>-report-<YYYYmmdd-HHMMSS>` without extension
pub fn report_file_name(report: &Report) -> String {
    format!(
        "{}-report-{}",
        report.mode,
        report.generated_at.format(FILE_TIMESTAMP_FORMAT)
    )
}

/// Write the report under `output_dir` and return the file path.
///
/// The directory is created if needed. An existing file is never
/// overwritten: `-1`, `-2`, ... is appended to the name instead.
pub fn write_json(report: &Report, output_dir: &Path, pretty: bool) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context_fn(|| format!("Cannot create {}", output_dir.display()))?;

    let stem = report_file_name(report);
    let (path, file) = create_unique(output_dir, &stem)?;

    let mut writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, report)?;
    } else {
        serde_json::to_writer(&mut writer, report)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!("Report written to {}", path.display());
    Ok(path)
}

fn create_unique(dir: &Path, stem: &str) -> Result<(PathBuf, fs::File)> {
    for n in 0..MAX_SUFFIX {
        let name = if n == 0 {
            format!("{}.json", stem)
        } else {
            format!("{}-{}.json", stem, n)
        };
        let path = dir.join(name);

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(ConfscopeError::Report(format!(
        "No free report name for {} in {}",
        stem,
        dir.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::AnalysisMode;
    use crate::report::Summary;
    use crate::types::TreeNode;
    use tempfile::TempDir;

    fn report(mode: AnalysisMode) -> Report {
        let mut tree = TreeNode::directory("app", ".");
        tree.children
            .push(TreeNode::file("package.json", "package.json", 2));
        let summary = Summary::from_tree(&tree, mode);
        Report::new(mode, PathBuf::from("/work/app"), summary, tree)
    }

    #[test]
    fn test_file_name_format() {
        let report = report(AnalysisMode::Scan);
        let name = report_file_name(&report);
        let expected = format!(
            "scan-report-{}",
            report.generated_at.format("%Y%m%d-%H%M%S")
        );
        assert_eq!(name, expected);
    }

    #[test]
    fn test_write_creates_directory() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("nested/reports");
        let report = report(AnalysisMode::Classify);

        let path = write_json(&report, &out, true).unwrap();
        assert!(path.starts_with(&out));
        assert!(path.extension().is_some_and(|e| e == "json"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  \"generated_at\""));
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["summary"]["files"], 1);
        assert_eq!(value["tree"]["children"][0]["name"], "package.json");
    }

    #[test]
    fn test_collisions_get_suffix() {
        let temp = TempDir::new().unwrap();
        let report = report(AnalysisMode::Full);
        let stem = report_file_name(&report);

        let first = write_json(&report, temp.path(), false).unwrap();
        let second = write_json(&report, temp.path(), false).unwrap();
        let third = write_json(&report, temp.path(), false).unwrap();

        assert_eq!(first, temp.path().join(format!("{}.json", stem)));
        assert_eq!(second, temp.path().join(format!("{}-1.json", stem)));
        assert_eq!(third, temp.path().join(format!("{}-2.json", stem)));
    }

    #[test]
    fn test_compact_output() {
        let temp = TempDir::new().unwrap();
        let path = write_json(&report(AnalysisMode::Scan), temp.path(), false).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content.trim_end().lines().count(), 1);
    }
}
