use serde::{Deserialize, Serialize};

use crate::analyzer::parser::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Parsed,
    /// Syntax tree contains error nodes; names were still extracted
    Partial,
    /// Over the configured size limit
    Skipped,
    Failed,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Parsed => "parsed",
            ScanStatus::Partial => "partial",
            ScanStatus::Skipped => "skipped",
            ScanStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Names extracted from a single source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSymbols {
    pub language: Language,
    pub status: ScanStatus,
    pub imports: Vec<String>,
    pub reexports: Vec<String>,
    pub components: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FileSymbols {
    /// A file that produced no names, with the reason
    pub fn unscanned(language: Language, status: ScanStatus, message: impl Into<String>) -> Self {
        Self {
            language,
            status,
            imports: Vec::new(),
            reexports: Vec::new(),
            components: Vec::new(),
            message: Some(message.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.reexports.is_empty() && self.components.is_empty()
    }
}
