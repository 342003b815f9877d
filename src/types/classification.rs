use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a configuration artifact comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    /// Operating system, VCS and environment files
    System,
    /// Manifests and lockfiles
    PackageManager,
    /// Framework and compiler tooling
    FrameworkTool,
    BuildTool,
    Linter,
    Testing,
    Ci,
    Container,
    Editor,
    Documentation,
    /// Project-specific configuration
    Custom,
}

impl Provenance {
    pub const ALL: [Provenance; 11] = [
        Provenance::System,
        Provenance::PackageManager,
        Provenance::FrameworkTool,
        Provenance::BuildTool,
        Provenance::Linter,
        Provenance::Testing,
        Provenance::Ci,
        Provenance::Container,
        Provenance::Editor,
        Provenance::Documentation,
        Provenance::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::System => "system",
            Provenance::PackageManager => "package-manager",
            Provenance::FrameworkTool => "framework-tool",
            Provenance::BuildTool => "build-tool",
            Provenance::Linter => "linter",
            Provenance::Testing => "testing",
            Provenance::Ci => "ci",
            Provenance::Container => "container",
            Provenance::Editor => "editor",
            Provenance::Documentation => "documentation",
            Provenance::Custom => "custom",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Provenance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .find(|p| p.as_str() == lower)
            .copied()
            .ok_or_else(|| {
                format!(
                    "Unknown provenance: {}. Valid values: {}",
                    s,
                    Self::ALL.map(|p| p.as_str()).join(", ")
                )
            })
    }
}

/// Which lookup produced a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
    ExactName,
    NamePattern,
    DirectorySubstring,
    UserRule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub provenance: Provenance,
    pub label: String,
    /// Table key or pattern that fired
    pub matched: String,
    pub rule: MatchKind,
}

impl Classification {
    pub fn new(
        provenance: Provenance,
        label: impl Into<String>,
        matched: impl Into<String>,
        rule: MatchKind,
    ) -> Self {
        Self {
            provenance,
            label: label.into(),
            matched: matched.into(),
            rule,
        }
    }
}
