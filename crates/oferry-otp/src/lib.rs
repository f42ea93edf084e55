//! # otpferry – OTP credential records
//!
//! Record model and export primitives for decoded one-time-password
//! credentials:
//!
//! - **Records** – TOTP/HOTP entries as a tagged union (`period` for
//!   time-based, `counter` for event-based)
//! - **otpauth:// URIs** – Canonical, byte-stable encoding per the Google
//!   Authenticator key-URI format
//! - **QR codes** – Offline rendering of URIs to PNG images and data URIs;
//!   the encoded secret never leaves the process

pub mod otp;
