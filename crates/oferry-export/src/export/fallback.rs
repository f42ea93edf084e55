//! Fallback copy path: stage the text in a temporary holding file and
//! feed it to a platform clipboard helper (`wl-copy`, `xclip`, `pbcopy`,
//! `clip`).
//!
//! The holding file is a scoped resource: removal happens in its
//! destructor, so success, helper failure, and unwinding all tear it down.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

use crate::export::types::ClipError;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Holding surface
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Temporary file holding the text handed to a helper process.  Removed
/// when dropped.
pub struct CopySurface {
    file: NamedTempFile,
}

impl CopySurface {
    /// Stage `text` in a fresh holding file.
    pub fn new(text: &str) -> Result<Self, ClipError> {
        let mut file = NamedTempFile::new().map_err(|e| ClipError::Surface(e.to_string()))?;
        file.write_all(text.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| ClipError::Surface(e.to_string()))?;
        Ok(Self { file })
    }

    /// Location of the staged text.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Independent read handle, positioned at the start.
    fn reader(&self) -> Result<std::fs::File, ClipError> {
        self.file
            .reopen()
            .map_err(|e| ClipError::Surface(e.to_string()))
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Helper commands
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// An external program that reads stdin onto the clipboard.
#[derive(Debug, Clone)]
pub struct HelperCommand {
    program: String,
    args: Vec<String>,
}

impl HelperCommand {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Human-readable form for logs and error messages.
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    fn run(&self, surface: &CopySurface) -> Result<(), ClipError> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::from(surface.reader()?))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ClipError::HelperFailed {
                helper: self.display(),
                reason: e.to_string(),
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipError::HelperFailed {
                helper: self.display(),
                reason: format!("exited with {}", status),
            })
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Fallback copier
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Ordered list of candidate helpers, tried until one delivers.
#[derive(Debug, Clone)]
pub struct FallbackCopy {
    helpers: Vec<HelperCommand>,
}

impl FallbackCopy {
    /// Helpers for the current platform.
    pub fn platform_default() -> Self {
        Self {
            helpers: platform_helpers(),
        }
    }

    /// Explicit helper list (tests, exotic setups).
    pub fn with_helpers(helpers: Vec<HelperCommand>) -> Self {
        Self { helpers }
    }

    /// Copy `text` by staging it and piping it to the first working
    /// helper.  Returns the helper that delivered.  The holding file is
    /// removed on every exit path.
    pub fn copy(&self, text: &str) -> Result<String, ClipError> {
        if self.helpers.is_empty() {
            return Err(ClipError::NoHelper);
        }
        let surface = CopySurface::new(text)?;
        let mut last_error = ClipError::NoHelper;
        for helper in &self.helpers {
            match helper.run(&surface) {
                Ok(()) => return Ok(helper.display()),
                Err(e) => last_error = e,
            }
        }
        Err(last_error)
    }
}

/// Linux: wl-copy under Wayland, xclip under X11.  Neither display
/// variable set usually means a bare tty with no clipboard at all.
#[cfg(target_os = "linux")]
fn platform_helpers() -> Vec<HelperCommand> {
    let mut helpers = Vec::new();
    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        helpers.push(HelperCommand::new("wl-copy", &[]));
    }
    if std::env::var_os("DISPLAY").is_some() {
        helpers.push(HelperCommand::new("xclip", &["-selection", "clipboard"]));
    }
    helpers
}

#[cfg(target_os = "macos")]
fn platform_helpers() -> Vec<HelperCommand> {
    vec![HelperCommand::new("pbcopy", &[])]
}

#[cfg(target_os = "windows")]
fn platform_helpers() -> Vec<HelperCommand> {
    vec![HelperCommand::new("clip", &[])]
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn platform_helpers() -> Vec<HelperCommand> {
    Vec::new()
}
