//! Export crate: sub-modules.

pub mod types;
pub mod clipboard;
pub mod fallback;
pub mod service;
pub mod notify;
pub mod session;

// Re-export top-level items for convenience.
pub use clipboard::{ClipboardBackend, SystemClipboard};
pub use fallback::{CopySurface, FallbackCopy, HelperCommand};
pub use notify::{ToastTimer, TOAST_DURATION};
pub use service::ExportService;
pub use session::{ExportSession, Ticket};
pub use types::*;
