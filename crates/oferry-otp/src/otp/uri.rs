//! Canonical `otpauth://` URI encoding per the Google Authenticator
//! key-URI format:
//! <https://github.com/google/google-authenticator/wiki/Key-Uri-Format>
//!
//! Format: `otpauth://totp/ISSUER:NAME?secret=BASE32&issuer=ISSUER&algorithm=SHA1&digits=6&period=30`

use crate::otp::types::*;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Encode
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Encode a record as a canonical `otpauth://` URI.
///
/// The query parameter order is fixed — `secret`, `issuer`, `algorithm`,
/// `digits`, then `period` (TOTP) or `counter` (HOTP) — and every
/// parameter is always emitted, so equal records produce byte-identical
/// URIs.  `issuer=` stays in the query even when the issuer is empty.
///
/// `issuer` and `name` are percent-encoded independently and joined with
/// a literal colon; `secret` is inserted as-is (it is already URI-safe)
/// and `algorithm` passes through verbatim.  A structurally invalid
/// record is rejected before any output is produced.
pub fn encode(record: &OtpRecord) -> Result<String, OtpError> {
    record.validate()?;

    let name = percent_encode(&record.name);
    let label = if record.issuer.is_empty() {
        name
    } else {
        format!("{}:{}", percent_encode(&record.issuer), name)
    };

    let tail = match record.kind {
        OtpKind::Totp { period } => format!("period={}", period),
        OtpKind::Hotp { counter } => format!("counter={}", counter),
    };

    Ok(format!(
        "otpauth://{}/{}?secret={}&issuer={}&algorithm={}&digits={}&{}",
        record.kind.as_str(),
        label,
        record.secret,
        percent_encode(&record.issuer),
        record.algorithm,
        record.digits,
        tail,
    ))
}

/// Encode several records, one URI per line.
///
/// Fails on the first invalid record rather than emitting a partial list.
pub fn encode_list(records: &[OtpRecord]) -> Result<String, OtpError> {
    let uris: Vec<String> = records.iter().map(encode).collect::<Result<_, _>>()?;
    Ok(uris.join("\n"))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Percent-encoding
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Escape every byte outside the RFC 3986 unreserved set.  Reserved URI
/// characters (`:`, `/`, `?`, `#`, `&`, `=`, `@`, …) are always escaped
/// so the literal label-separator colon stays unambiguous.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
