//! Session Buffer Line Model
//!
//! Represents a single rendered line in an open terminal session. Every
//! line is tagged with the kind that produced it so the presentation layer
//! can style echoed input, command output, and error messages distinctly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a rendered terminal line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Echoed user input (prompt prefix + raw text)
    Input,
    /// Normal command output
    Output,
    /// Error message (e.g. command not found)
    Error,
}

/// A single line in the session buffer
///
/// Lines are immutable once appended; the buffer only grows until it is
/// cleared or the session is dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BufferLine {
    /// Kind of this line
    pub kind: LineKind,

    /// The rendered text content
    pub text: String,

    /// When this line was appended
    pub timestamp: DateTime<Utc>,
}

impl BufferLine {
    /// Create a new line of the given kind
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create an echoed-input line
    pub fn input(text: impl Into<String>) -> Self {
        Self::new(LineKind::Input, text)
    }

    /// Create an output line
    pub fn output(text: impl Into<String>) -> Self {
        Self::new(LineKind::Output, text)
    }

    /// Create an error line
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }

    /// A blank output line (used for visual spacing)
    pub fn blank() -> Self {
        Self::output("")
    }

    /// Check if this line carries no text
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for BufferLine {
    fn from(text: &str) -> Self {
        Self::output(text)
    }
}

impl From<String> for BufferLine {
    fn from(text: String) -> Self {
        Self::output(text)
    }
}
