//! OTP crate: sub-modules.

pub mod types;
pub mod uri;
pub mod qr;

// Re-export top-level items for convenience.
pub use qr::QrImage;
pub use types::*;
