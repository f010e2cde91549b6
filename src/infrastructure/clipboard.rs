//! Clipboard access.
//!
//! The system implementation pipes text into the platform's copy tool,
//! trying each known tool in turn until one accepts the text.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::domain::{AppError, Result};

/// Write-only clipboard.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    /// Returns `AppError::Clipboard` if the clipboard is unavailable or refuses the write.
    fn write_text(&self, text: &str) -> Result<()>;
}

/// A copy tool invocation.
#[derive(Debug, Clone, Copy)]
struct CopyTool {
    program: &'static str,
    args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const COPY_TOOLS: &[CopyTool] = &[CopyTool {
    program: "pbcopy",
    args: &[],
}];

#[cfg(target_os = "windows")]
const COPY_TOOLS: &[CopyTool] = &[CopyTool {
    program: "clip",
    args: &[],
}];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const COPY_TOOLS: &[CopyTool] = &[
    CopyTool {
        program: "wl-copy",
        args: &[],
    },
    CopyTool {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    CopyTool {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

/// Clipboard backed by platform command-line tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Runs one tool. `Ok(false)` means the tool is not installed.
    fn try_tool(tool: CopyTool, text: &str) -> Result<bool> {
        let mut child = match Command::new(tool.program)
            .args(tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(tool = tool.program, "Clipboard tool not installed");
                return Ok(false);
            }
            Err(e) => {
                return Err(AppError::clipboard_io(
                    format!("Failed to start {}", tool.program),
                    e,
                ));
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                // Reap the tool so a failed write does not leave a zombie behind.
                let _ = child.kill();
                let _ = child.wait();
                return Err(AppError::clipboard_io(
                    format!("Failed to write to {}", tool.program),
                    e,
                ));
            }
            // Dropping stdin closes the pipe so the tool can finish.
        }

        let status = child
            .wait()
            .map_err(|e| AppError::clipboard_io(format!("{} did not finish", tool.program), e))?;

        if !status.success() {
            return Err(AppError::clipboard(format!(
                "{} exited with {status}",
                tool.program
            )));
        }

        tracing::debug!(tool = tool.program, "Clipboard write complete");
        Ok(true)
    }

    /// Tries each tool in order until one accepts the text.
    ///
    /// Missing and failing tools are skipped; the last failure is reported
    /// only when no tool succeeded.
    fn write_with(tools: &[CopyTool], text: &str) -> Result<()> {
        let mut last_failure = None;

        for tool in tools {
            match Self::try_tool(*tool, text) {
                Ok(true) => return Ok(()),
                Ok(false) => {}
                Err(e) => {
                    tracing::debug!(
                        tool = tool.program,
                        error = %e,
                        "Clipboard tool failed, trying next"
                    );
                    last_failure = Some(e);
                }
            }
        }

        let names: Vec<&str> = tools.iter().map(|t| t.program).collect();
        match last_failure {
            Some(AppError::Clipboard { message, source }) => Err(AppError::Clipboard {
                message: format!(
                    "no clipboard tool succeeded (tried: {}; last: {message})",
                    names.join(", ")
                ),
                source,
            }),
            Some(other) => Err(other),
            None => Err(AppError::clipboard(format!(
                "no clipboard tool found (tried: {})",
                names.join(", ")
            ))),
        }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        Self::write_with(COPY_TOOLS, text)
    }
}

/// In-memory clipboard for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: std::sync::Mutex<Option<String>>,
    fail: bool,
}

#[cfg(test)]
impl MemoryClipboard {
    /// A clipboard that rejects every write.
    pub fn failing() -> Self {
        Self {
            contents: std::sync::Mutex::default(),
            fail: true,
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(AppError::clipboard("permission denied"));
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}
