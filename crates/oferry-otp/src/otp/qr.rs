//! QR-code rendering for `otpauth://` URIs.
//!
//! Fully offline: the `qrcode` crate produces the module matrix and the
//! `image` crate rasterises it to a PNG.  The encoded text never leaves
//! the process, so a secret embedded in a URI is never exposed to a
//! remote image service.

use image::{GrayImage, Luma};
use qrcode::QrCode;

use crate::otp::types::OtpError;

/// Module size in pixels (each QR "module" becomes this many px wide).
const MODULE_PX: u32 = 8;
/// Quiet-zone border in modules.
const QUIET_ZONE: u32 = 4;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Rendered image
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A self-contained QR raster, ready for direct display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    /// PNG-encoded image bytes.
    pub png: Vec<u8>,
    /// Matrix width in modules, quiet zone excluded.
    pub modules: usize,
    /// Final image width/height in pixels.
    pub pixel_size: u32,
}

impl QrImage {
    /// Base64 data URI (`data:image/png;base64,...`) for embedding in UIs
    /// or HTML exports.
    pub fn data_uri(&self) -> String {
        use base64::Engine;
        let b64 = base64::engine::general_purpose::STANDARD.encode(&self.png);
        format!("data:image/png;base64,{}", b64)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Rendering
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Render a QR image for `text` without blocking the caller.
///
/// The only validation is a non-emptiness check; any string the URI
/// encoder produces (or arbitrary text) is accepted.  Rendering is
/// idempotent and side-effect-free: the same input yields identical
/// bytes, and a failed render leaves nothing behind.
pub async fn render(text: &str) -> Result<QrImage, OtpError> {
    if text.is_empty() {
        return Err(OtpError::QrEncoding("nothing to encode".into()));
    }
    let owned = text.to_owned();
    tokio::task::spawn_blocking(move || encode_png(&owned, None))
        .await
        .map_err(|e| OtpError::QrEncoding(format!("render task failed: {}", e)))?
}

/// Rasterise `text` into a grayscale PNG QR image.
///
/// Fails when the input does not fit any QR version/error-correction
/// combination, or when the PNG encoder rejects the raster.
pub fn encode_png(text: &str, module_px: Option<u32>) -> Result<QrImage, OtpError> {
    let code = QrCode::new(text.as_bytes())
        .map_err(|e| OtpError::QrEncoding(format!("QR encode error: {}", e)))?;

    let px = module_px.unwrap_or(MODULE_PX).max(1);
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let pixel_size = (modules + QUIET_ZONE * 2) * px;

    // Map every output pixel back to its module; the quiet zone stays white.
    let raster = GrayImage::from_fn(pixel_size, pixel_size, |ix, iy| {
        let mx = ix / px;
        let my = iy / px;
        let in_matrix = (QUIET_ZONE..QUIET_ZONE + modules).contains(&mx)
            && (QUIET_ZONE..QUIET_ZONE + modules).contains(&my);
        let dark = in_matrix
            && colors[((my - QUIET_ZONE) * modules + (mx - QUIET_ZONE)) as usize]
                == qrcode::Color::Dark;
        if dark {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    });

    let mut png = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png);
    image::ImageEncoder::write_image(
        encoder,
        raster.as_raw(),
        pixel_size,
        pixel_size,
        image::ExtendedColorType::L8,
    )
    .map_err(|e| OtpError::QrEncoding(format!("PNG encode error: {}", e)))?;

    Ok(QrImage {
        png,
        modules: modules as usize,
        pixel_size,
    })
}
