//! Session Buffer and Input State
//!
//! The session buffer is the ordered, append-only log of rendered lines
//! for one open terminal instance. The input state owns the uncommitted
//! input text, the submitted-command history, and the recall cursor used
//! for Up/Down navigation.

use serde::Serialize;

use crate::error::Result;
use crate::models::BufferLine;

/// Ordered log of rendered lines for one terminal session.
///
/// Lines persist only for the lifetime of the session: `clear` discards
/// them wholesale and nothing survives a re-open.
#[derive(Debug, Default)]
pub struct SessionBuffer {
    lines: Vec<BufferLine>,
}

impl SessionBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a line
    pub fn push(&mut self, line: BufferLine) {
        self.lines.push(line);
    }

    /// Discard every line
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// All lines, oldest first
    pub fn lines(&self) -> &[BufferLine] {
        &self.lines
    }

    /// Number of lines in the buffer
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the buffer holds no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Export the transcript as plain text, one buffer line per text line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }

    /// Export the transcript as JSON.
    pub fn to_json(&self) -> Result<String> {
        #[derive(Serialize)]
        struct Transcript<'a> {
            lines: &'a [BufferLine],
        }
        Ok(serde_json::to_string_pretty(&Transcript {
            lines: &self.lines,
        })?)
    }
}

/// Transient input text plus history recall state.
///
/// History keeps the literal raw text of every submission that was
/// non-empty after trimming, in order, duplicates included. The cursor is
/// `None` while not browsing; recall only reads history and rewrites the
/// transient text.
#[derive(Debug)]
pub struct InputState {
    /// Current (uncommitted) input text
    text: String,
    /// Previously submitted commands, oldest first
    history: Vec<String>,
    /// Current recall position (None = not browsing)
    position: Option<usize>,
    /// Maximum history size
    max_history: usize,
}

impl InputState {
    /// Create an empty input state with the given history capacity
    pub fn new(max_history: usize) -> Self {
        Self {
            text: String::new(),
            history: Vec::new(),
            position: None,
            max_history,
        }
    }

    /// Current input text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for the text edit widget
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Replace the input text (leaves the recall cursor untouched)
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Take the current text, clearing the input
    pub fn take_text(&mut self) -> String {
        self.position = None;
        std::mem::take(&mut self.text)
    }

    /// Record a submitted command and reset the recall cursor so the next
    /// recall starts from the most recent entry.
    pub fn push_history(&mut self, raw: impl Into<String>) {
        self.history.push(raw.into());
        while self.history.len() > self.max_history {
            self.history.remove(0);
        }
        self.position = None;
    }

    /// History entries, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Check if the cursor is currently browsing history
    pub fn is_browsing(&self) -> bool {
        self.position.is_some()
    }

    /// Recall the previous (older) history entry into the input text.
    ///
    /// Saturates at the oldest entry; does nothing when history is empty.
    pub fn recall_previous(&mut self) {
        if self.history.is_empty() {
            return;
        }

        let position = match self.position {
            None => self.history.len() - 1,
            Some(pos) => pos.saturating_sub(1),
        };

        if let Some(entry) = self.history.get(position) {
            self.text = entry.clone();
            self.position = Some(position);
        }
    }

    /// Recall the next (newer) history entry into the input text.
    ///
    /// Moving past the newest entry stops browsing and clears the input.
    /// Does nothing when not browsing.
    pub fn recall_next(&mut self) {
        let position = match self.position {
            Some(pos) if pos + 1 < self.history.len() => pos + 1,
            Some(_) => {
                self.text.clear();
                self.position = None;
                return;
            }
            None => return,
        };

        if let Some(entry) = self.history.get(position) {
            self.text = entry.clone();
            self.position = Some(position);
        }
    }
}
