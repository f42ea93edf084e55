//! Transient notification ("toast") state machine.
//!
//! Owned by the rendering shell — the export service stays stateless and
//! only returns results.  `Idle -> Showing(message) -> Idle`, where
//! `Showing` expires after [`TOAST_DURATION`] unless a newer request
//! supersedes it first; the newest request always wins and restarts the
//! timer.  Time is supplied by the caller, so the machine is
//! deterministic under test.  Single-threaded cooperative use; no locks.

use std::time::{Duration, Instant};

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_millis(2000);

/// `Idle -> Showing -> Idle` with last-write-wins supersede.
#[derive(Debug, Default)]
pub struct ToastTimer {
    showing: Option<(String, Instant)>,
}

impl ToastTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, replacing whatever is currently visible and
    /// restarting the expiry timer.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.showing = Some((message.into(), now));
    }

    /// The active message, or `None` when idle or expired.
    pub fn message(&self, now: Instant) -> Option<&str> {
        match &self.showing {
            Some((message, since)) if now.duration_since(*since) < TOAST_DURATION => {
                Some(message.as_str())
            }
            _ => None,
        }
    }

    /// Collapse an expired `Showing` back to `Idle`.
    pub fn tick(&mut self, now: Instant) {
        if self.message(now).is_none() {
            self.showing = None;
        }
    }

    pub fn is_idle(&self, now: Instant) -> bool {
        self.message(now).is_none()
    }
}
