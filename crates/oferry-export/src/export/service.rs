//! High-level export service — primary clipboard write with fallback,
//! plus record-level conveniences composing the URI encoder and QR
//! renderer.  Stateless: every call stands on its own and all outcomes
//! travel back to the caller as values.

use std::sync::Arc;

use oferry_otp::otp::qr::{self, QrImage};
use oferry_otp::otp::types::{OtpError, OtpRecord};
use oferry_otp::otp::uri;

use crate::export::clipboard::{ClipboardBackend, SystemClipboard};
use crate::export::fallback::FallbackCopy;
use crate::export::types::ExportResult;

/// Clipboard and QR export for OTP records.
pub struct ExportService<B: ClipboardBackend = SystemClipboard> {
    primary: Arc<B>,
    fallback: FallbackCopy,
}

impl ExportService<SystemClipboard> {
    /// Service with the system clipboard and platform-default helpers.
    pub fn new() -> Self {
        Self::with_backend(SystemClipboard)
    }
}

impl Default for ExportService<SystemClipboard> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ClipboardBackend> ExportService<B> {
    /// Service with a custom primary backend.
    pub fn with_backend(primary: B) -> Self {
        Self {
            primary: Arc::new(primary),
            fallback: FallbackCopy::platform_default(),
        }
    }

    /// Builder: replace the fallback helper list.
    pub fn with_fallback(mut self, fallback: FallbackCopy) -> Self {
        self.fallback = fallback;
        self
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    //  Clipboard
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Copy `text` to the clipboard, verbatim.
    ///
    /// The system clipboard is tried first; the fallback helper path runs
    /// only when the primary write fails.  Never returns an error and
    /// never panics past this boundary — both-path failure is reported in
    /// the result.
    pub async fn copy_to_clipboard(&self, text: &str) -> ExportResult {
        let primary = Arc::clone(&self.primary);
        let staged = text.to_owned();
        let primary_error =
            match tokio::task::spawn_blocking(move || primary.set_text(&staged)).await {
                Ok(Ok(())) => {
                    log::debug!("copied {} bytes via system clipboard", text.len());
                    return ExportResult::primary();
                }
                Ok(Err(e)) => e.to_string(),
                Err(e) => format!("clipboard task failed: {}", e),
            };

        log::warn!(
            "system clipboard write failed ({}); trying fallback",
            primary_error
        );

        let fallback = self.fallback.clone();
        let staged = text.to_owned();
        match tokio::task::spawn_blocking(move || fallback.copy(&staged)).await {
            Ok(Ok(helper)) => {
                log::debug!("copied {} bytes via {}", text.len(), helper);
                ExportResult::fallback()
            }
            Ok(Err(e)) => {
                ExportResult::failed(format!("primary: {}; fallback: {}", primary_error, e))
            }
            Err(e) => ExportResult::failed(format!(
                "primary: {}; fallback task failed: {}",
                primary_error, e
            )),
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    //  QR rendering
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Render any URI (or arbitrary text) as a QR image, locally.
    pub async fn render_qr(&self, uri: &str) -> Result<QrImage, OtpError> {
        qr::render(uri).await
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    //  Record-level conveniences
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Copy a record's shared secret as-is.
    pub async fn copy_record_secret(&self, record: &OtpRecord) -> ExportResult {
        self.copy_to_clipboard(&record.secret).await
    }

    /// Encode a record and copy the resulting `otpauth://` URI.
    ///
    /// An invalid record fails loudly before anything touches the
    /// clipboard; the clipboard outcome itself is data, not an error.
    pub async fn copy_record_uri(&self, record: &OtpRecord) -> Result<ExportResult, OtpError> {
        let encoded = uri::encode(record)?;
        Ok(self.copy_to_clipboard(&encoded).await)
    }

    /// Encode a record and render its URI as a QR image.
    pub async fn record_qr(&self, record: &OtpRecord) -> Result<QrImage, OtpError> {
        let encoded = uri::encode(record)?;
        qr::render(&encoded).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::fallback::HelperCommand;
    use crate::export::types::ClipError;
    use std::sync::Mutex;

    /// Records what lands on it; always succeeds.
    struct CapturingClipboard {
        store: Arc<Mutex<Option<String>>>,
    }

    impl ClipboardBackend for CapturingClipboard {
        fn set_text(&self, text: &str) -> Result<(), ClipError> {
            *self.store.lock().unwrap() = Some(text.to_owned());
            Ok(())
        }
    }

    /// Rejects every write, as an unavailable platform clipboard would.
    struct RejectingClipboard;

    impl ClipboardBackend for RejectingClipboard {
        fn set_text(&self, _text: &str) -> Result<(), ClipError> {
            Err(ClipError::WriteFailed("simulated rejection".into()))
        }
    }

    fn sh(script: &str) -> HelperCommand {
        HelperCommand::new("sh", &["-c", script])
    }

    // ── Primary path ─────────────────────────────────────────────

    #[tokio::test]
    async fn primary_success_reports_no_fallback() {
        let store = Arc::new(Mutex::new(None));
        let svc = ExportService::with_backend(CapturingClipboard {
            store: Arc::clone(&store),
        });
        let result = svc.copy_to_clipboard("JBSWY3DPEHPK3PXP").await;
        assert!(result.succeeded);
        assert!(!result.used_fallback);
        assert!(result.error_message.is_none());
        assert_eq!(store.lock().unwrap().as_deref(), Some("JBSWY3DPEHPK3PXP"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn primary_success_never_touches_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("fallback-ran");
        let script = format!("touch {}", marker.display());
        let store = Arc::new(Mutex::new(None));
        let svc = ExportService::with_backend(CapturingClipboard { store })
            .with_fallback(FallbackCopy::with_helpers(vec![sh(&script)]));
        let result = svc.copy_to_clipboard("secret").await;
        assert!(result.succeeded);
        assert!(!marker.exists());
    }

    // ── Fallback path ────────────────────────────────────────────

    #[cfg(unix)]
    #[tokio::test]
    async fn primary_rejection_falls_back() {
        let svc = ExportService::with_backend(RejectingClipboard)
            .with_fallback(FallbackCopy::with_helpers(vec![sh("cat > /dev/null")]));
        let result = svc.copy_to_clipboard("secret").await;
        assert!(result.succeeded);
        assert!(result.used_fallback);
        assert!(result.error_message.is_none());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn fallback_copies_text_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clip.txt");
        let script = format!("cat > {}", out.display());
        let svc = ExportService::with_backend(RejectingClipboard)
            .with_fallback(FallbackCopy::with_helpers(vec![sh(&script)]));
        let result = svc.copy_to_clipboard("otpauth://totp/A:a?secret=S").await;
        assert!(result.succeeded);
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "otpauth://totp/A:a?secret=S"
        );
    }

    #[tokio::test]
    async fn both_paths_failing_reports_failure() {
        let svc = ExportService::with_backend(RejectingClipboard).with_fallback(
            FallbackCopy::with_helpers(vec![HelperCommand::new(
                "otpferry-definitely-missing-helper",
                &[],
            )]),
        );
        let result = svc.copy_to_clipboard("secret").await;
        assert!(!result.succeeded);
        assert!(result.used_fallback);
        let message = result.error_message.unwrap();
        assert!(message.contains("simulated rejection"));
        assert!(message.contains("otpferry-definitely-missing-helper"));
    }

    // ── Record-level conveniences ────────────────────────────────

    #[tokio::test]
    async fn copy_record_secret_copies_raw_secret() {
        let store = Arc::new(Mutex::new(None));
        let svc = ExportService::with_backend(CapturingClipboard {
            store: Arc::clone(&store),
        });
        let record = OtpRecord::new("alice", "JBSWY3DPEHPK3PXP").with_issuer("Example");
        let result = svc.copy_record_secret(&record).await;
        assert!(result.succeeded);
        assert_eq!(store.lock().unwrap().as_deref(), Some("JBSWY3DPEHPK3PXP"));
    }

    #[tokio::test]
    async fn copy_record_uri_copies_encoded_uri() {
        let store = Arc::new(Mutex::new(None));
        let svc = ExportService::with_backend(CapturingClipboard {
            store: Arc::clone(&store),
        });
        let record = OtpRecord::new("alice", "JBSWY3DPEHPK3PXP").with_issuer("Example");
        let result = svc.copy_record_uri(&record).await.unwrap();
        assert!(result.succeeded);
        assert_eq!(
            store.lock().unwrap().as_deref(),
            Some("otpauth://totp/Example:alice?secret=JBSWY3DPEHPK3PXP&issuer=Example&algorithm=SHA1&digits=6&period=30")
        );
    }

    #[tokio::test]
    async fn invalid_record_fails_loudly_before_copy() {
        let store = Arc::new(Mutex::new(None));
        let svc = ExportService::with_backend(CapturingClipboard {
            store: Arc::clone(&store),
        });
        let record = OtpRecord::new("alice", "");
        let err = svc.copy_record_uri(&record).await.unwrap_err();
        assert!(matches!(err, OtpError::InvalidRecord(_)));
        assert!(store.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn record_qr_renders_png() {
        let svc = ExportService::new();
        let record = OtpRecord::new("alice", "JBSWY3DPEHPK3PXP").with_issuer("Example");
        let image = svc.record_qr(&record).await.unwrap();
        assert_eq!(&image.png[..4], b"\x89PNG");
    }

    #[tokio::test]
    async fn render_qr_accepts_any_uri_string() {
        let svc = ExportService::new();
        let image = svc.render_qr("otpauth://hotp/A:a?secret=S&counter=1").await.unwrap();
        assert!(image.data_uri().starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn record_qr_rejects_invalid_record() {
        let svc = ExportService::new();
        let record = OtpRecord::new("", "SECRET");
        assert!(matches!(
            svc.record_qr(&record).await,
            Err(OtpError::InvalidRecord(_))
        ));
    }
}
