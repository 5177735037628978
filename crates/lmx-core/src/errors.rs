//! Structured error types shared across the LMX crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`LmxError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (paths, keys, sizes).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Adds the `path` context entry.
    pub fn with_path(self, path: &Path) -> Self {
        self.with_context("path", path.display().to_string())
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for loaders and renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum LmxError {
    /// Filesystem failures (missing inputs, unwritable output directories).
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// Input documents that do not match the expected shape.
    #[error("schema error: {0}")]
    Schema(ErrorInfo),
    /// Drawing backend failures.
    #[error("render error: {0}")]
    Render(ErrorInfo),
    /// Invalid render configuration.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl LmxError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            LmxError::Io(info)
            | LmxError::Schema(info)
            | LmxError::Render(info)
            | LmxError::Config(info) => info,
        }
    }

    /// Wraps an I/O failure that occurred while touching `path`.
    pub fn io(code: &str, path: &Path, err: &std::io::Error) -> Self {
        LmxError::Io(ErrorInfo::new(code, err.to_string()).with_path(path))
    }
}

/// Failure that stopped a log scan early.
///
/// The `Display` output is the message shown to the user; samples read before
/// the failure are kept by the caller.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The log file does not exist.
    #[error("Error: File not found at {}", path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },
    /// Any other read or decode failure.
    #[error("An error occurred: {0}")]
    Io(#[from] std::io::Error),
}
