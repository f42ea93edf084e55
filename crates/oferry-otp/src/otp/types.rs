//! Core types for decoded OTP credential records.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  OTP kind
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Whether a record is time-based or counter-based, together with the
/// variant's own moving part: a TOTP record carries the time window in
/// seconds, a HOTP record the monotonic event counter.  The two are
/// mutually exclusive by construction.
///
/// The tag serialises lowercase; upstream decoders that emit upper-case
/// spellings are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OtpKind {
    #[serde(rename = "totp", alias = "TOTP", alias = "Totp")]
    Totp { period: u32 },
    #[serde(rename = "hotp", alias = "HOTP", alias = "Hotp")]
    Hotp { counter: u64 },
}

impl Default for OtpKind {
    fn default() -> Self {
        Self::Totp { period: 30 }
    }
}

impl fmt::Display for OtpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OtpKind {
    /// URI-safe name (`totp` / `hotp`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Totp { .. } => "totp",
            Self::Hotp { .. } => "hotp",
        }
    }

    /// Time window in seconds (TOTP only).
    pub fn period(&self) -> Option<u32> {
        match self {
            Self::Totp { period } => Some(*period),
            Self::Hotp { .. } => None,
        }
    }

    /// Event counter (HOTP only).
    pub fn counter(&self) -> Option<u64> {
        match self {
            Self::Totp { .. } => None,
            Self::Hotp { counter } => Some(*counter),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  OTP record
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A decoded OTP credential entry, supplied by the caller per render pass.
///
/// The record is an immutable value to this crate: encoding and rendering
/// never mutate it, and nothing here caches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Account label (e.g. "alice@example.com").  Required, non-empty
    /// after trimming.
    pub name: String,
    /// Issuer (e.g. "GitHub").  Empty string means "no issuer".
    #[serde(default)]
    pub issuer: String,
    /// Pre-encoded shared secret.  Opaque to this crate: never decoded,
    /// never format-validated, only checked for emptiness.
    pub secret: String,
    /// Time-based or counter-based, with the matching moving part.
    #[serde(flatten)]
    pub kind: OtpKind,
    /// Hash algorithm name, passed through verbatim (e.g. "SHA1").
    pub algorithm: String,
    /// Number of digits in generated codes, typically 6–8.
    pub digits: u8,
}

impl OtpRecord {
    /// Create a minimal TOTP record with defaults.
    pub fn new(name: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            issuer: String::new(),
            secret: secret.into(),
            kind: OtpKind::default(),
            algorithm: "SHA1".to_string(),
            digits: 6,
        }
    }

    /// Builder: set issuer.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Builder: set algorithm name.
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Builder: set digit count.
    pub fn with_digits(mut self, digits: u8) -> Self {
        self.digits = digits;
        self
    }

    /// Builder: time-based with the given window.
    pub fn with_period(mut self, period: u32) -> Self {
        self.kind = OtpKind::Totp { period };
        self
    }

    /// Builder: counter-based.
    pub fn as_hotp(mut self, counter: u64) -> Self {
        self.kind = OtpKind::Hotp { counter };
        self
    }

    /// Display name: "Issuer - name" or just "name".
    pub fn display_name(&self) -> String {
        if self.issuer.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.issuer, self.name)
        }
    }

    /// Structural validation.  Fails loudly so a malformed record can
    /// never reach the URI encoder unnoticed.
    pub fn validate(&self) -> Result<(), OtpError> {
        if self.name.trim().is_empty() {
            return Err(OtpError::InvalidRecord("name must not be empty".into()));
        }
        if self.secret.is_empty() {
            return Err(OtpError::InvalidRecord("secret must not be empty".into()));
        }
        if self.digits == 0 {
            return Err(OtpError::InvalidRecord("digits must be positive".into()));
        }
        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Error type
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Crate-level error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OtpError {
    /// The record is structurally unusable (empty name/secret, zero digits).
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    /// QR image generation failed (input too long, raster encode error).
    #[error("QR encoding failed: {0}")]
    QrEncoding(String),
}
