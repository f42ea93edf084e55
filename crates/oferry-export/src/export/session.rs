//! Per-request liveness tracking.
//!
//! QR rendering and clipboard writes suspend; by the time one completes,
//! the view that asked may be gone or may have asked again.  A [`Ticket`]
//! captures the generation current when the request started, and the
//! shell checks [`Ticket::is_current`] before applying a result — a stale
//! completion never writes into a disposed view.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared generation counter for one view's in-flight export operations.
#[derive(Debug, Default)]
pub struct ExportSession {
    current: Arc<AtomicU64>,
}

impl ExportSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every ticket issued before it.
    pub fn begin(&self) -> Ticket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            generation,
            current: Arc::clone(&self.current),
        }
    }

    /// Retire the view: every outstanding ticket becomes stale.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

/// Handle for a single in-flight request.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl Ticket {
    /// Whether this request is still the latest one.
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}
