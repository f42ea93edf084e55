//! Core types for the export crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Export result
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Outcome of a clipboard export.  Returned by value and never persisted;
/// the shell decides how to surface it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResult {
    /// Whether the text made it onto the clipboard.
    pub succeeded: bool,
    /// Whether the fallback path was exercised.
    pub used_fallback: bool,
    /// Combined failure detail when both paths failed.
    pub error_message: Option<String>,
}

impl ExportResult {
    /// Primary path succeeded; the fallback was never touched.
    pub fn primary() -> Self {
        Self {
            succeeded: true,
            used_fallback: false,
            error_message: None,
        }
    }

    /// Primary failed but the fallback delivered.
    pub fn fallback() -> Self {
        Self {
            succeeded: true,
            used_fallback: true,
            error_message: None,
        }
    }

    /// Both paths failed.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            used_fallback: true,
            error_message: Some(message.into()),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Error type
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Failures of the individual copy mechanisms.  These never cross the
/// service boundary; `ExportService` folds them into an `ExportResult`.
#[derive(Debug, Clone, Error)]
pub enum ClipError {
    #[error("system clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("system clipboard write failed: {0}")]
    WriteFailed(String),
    #[error("no clipboard helper available on this platform")]
    NoHelper,
    #[error("could not stage text for the fallback copy: {0}")]
    Surface(String),
    #[error("clipboard helper `{helper}` failed: {reason}")]
    HelperFailed { helper: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_constructors_set_flags() {
        let primary = ExportResult::primary();
        assert!(primary.succeeded && !primary.used_fallback);
        assert!(primary.error_message.is_none());

        let fallback = ExportResult::fallback();
        assert!(fallback.succeeded && fallback.used_fallback);

        let failed = ExportResult::failed("both paths down");
        assert!(!failed.succeeded && failed.used_fallback);
        assert_eq!(failed.error_message.as_deref(), Some("both paths down"));
    }

    #[test]
    fn result_serde_roundtrip() {
        let result = ExportResult::failed("no helper");
        let json = serde_json::to_string(&result).unwrap();
        let back: ExportResult = serde_json::from_str(&json).unwrap();
        assert!(!back.succeeded);
        assert_eq!(back.error_message.as_deref(), Some("no helper"));
    }

    #[test]
    fn error_display() {
        let err = ClipError::HelperFailed {
            helper: "xclip -selection clipboard".into(),
            reason: "exited with exit status: 1".into(),
        };
        let text = err.to_string();
        assert!(text.contains("xclip"));
        assert!(text.contains("exit status"));
    }
}
