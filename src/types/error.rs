//! Unified Error Type System
//!
//! Centralized error type for the library. The binary wraps it in
//! `anyhow` at the top level only.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfscopeError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Parse error in {path}: {message}")]
    Parse { message: String, path: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Report error: {0}")]
    Report(String),

    /// Any lower-level failure with a caller-supplied description
    #[error("{0}")]
    Context(String),
}

pub type Result<T> = std::result::Result<T, ConfscopeError>;

impl ConfscopeError {
    /// Create a parse error for a file
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Input errors come from the caller, not from the walk itself
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::PathNotFound(_) | Self::NotADirectory(_))
    }
}

/// Context extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> Result<T>;

    /// Add context using a closure (lazy evaluation)
    fn with_context_fn<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| ConfscopeError::Context(format!("{}: {}", context.into(), e)))
    }

    fn with_context_fn<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| ConfscopeError::Context(format!("{}: {}", f().into(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_errors_display() {
        let err = ConfscopeError::PathNotFound(PathBuf::from("/nope"));
        assert_eq!(err.to_string(), "Path does not exist: /nope");
        assert!(err.is_input_error());

        let err = ConfscopeError::NotADirectory(PathBuf::from("Cargo.toml"));
        assert_eq!(err.to_string(), "Not a directory: Cargo.toml");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_parse_error_display() {
        let err = ConfscopeError::parse("src/App.tsx", "grammar unavailable");
        assert_eq!(
            err.to_string(),
            "Parse error in src/App.tsx: grammar unavailable"
        );
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_with_context() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = io.with_context("Cannot create out").unwrap_err();
        assert!(matches!(err, ConfscopeError::Context(_)));
        assert_eq!(err.to_string(), "Cannot create out: denied");
    }

    #[test]
    fn test_context_not_labelled_as_report() {
        let bad: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err = bad
            .with_context_fn(|| format!("Reading {}", "config.json"))
            .unwrap_err();
        assert!(err.to_string().starts_with("Reading config.json: "));
        assert!(!err.to_string().contains("Report error"));
    }

    #[test]
    fn test_with_context_fn_is_lazy_on_ok() {
        let ok: std::result::Result<u8, std::io::Error> = Ok(7);
        let value = ok
            .with_context_fn(|| -> String { panic!("context must not be built") })
            .unwrap();
        assert_eq!(value, 7);
    }
}
