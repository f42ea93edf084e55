//! # otpferry – Export pipeline
//!
//! Clipboard and QR export for decoded OTP credential records:
//!
//! - **Clipboard** – System clipboard writes with a guaranteed
//!   helper-process fallback; both-path failure is reported in the result,
//!   never thrown
//! - **Toast state** – Explicit `Idle -> Showing -> Idle` machine for the
//!   shell's transient notifications
//! - **Liveness** – Generation tickets so a stale async completion never
//!   touches a disposed view

pub mod export;
