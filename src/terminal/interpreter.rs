//! Line Interpreter
//!
//! Turns one raw submitted line into session-buffer mutations: echo the
//! input, dispatch the first token, and report the outcome to the host.
//! The two control commands (`clear`, `exit`) are intercepted here and
//! never go through the generic registry lookup.

use crate::models::BufferLine;

use super::registry::{CommandRegistry, CLEAR_COMMAND, EXIT_COMMAND};
use super::session::{InputState, SessionBuffer};

/// Farewell line appended by `exit` before the host closes the overlay.
pub const FAREWELL: &str = "Goodbye! Closing terminal...";

/// What a submission did, beyond appending lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Lines were appended (including the no-op blank for empty input)
    Appended,
    /// The whole buffer was discarded (`clear`)
    Cleared,
    /// The farewell was appended and the host should schedule its close
    /// action (`exit`)
    Closing,
}

/// Dispatches submitted lines against an immutable command registry
#[derive(Debug)]
pub struct LineInterpreter {
    registry: CommandRegistry,
    prompt: String,
}

impl LineInterpreter {
    /// Create an interpreter over a prepared registry.
    ///
    /// `prompt` is the prefix echoed in front of every submission.
    pub fn new(registry: CommandRegistry, prompt: impl Into<String>) -> Self {
        Self {
            registry,
            prompt: prompt.into(),
        }
    }

    /// The echoed prompt prefix
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The command registry
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Process one submitted line.
    ///
    /// Every submission echoes one Input line, even when empty. Non-empty
    /// submissions are recorded in history before dispatch, so `clear` and
    /// `exit` are recallable like any other command. Unknown keywords are
    /// expected input: they produce an Error line, never a failure.
    pub fn submit(
        &self,
        raw: &str,
        buffer: &mut SessionBuffer,
        input: &mut InputState,
    ) -> SubmitOutcome {
        buffer.push(BufferLine::input(format!("{}{}", self.prompt, raw)));

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            buffer.push(BufferLine::blank());
            return SubmitOutcome::Appended;
        }

        input.push_history(raw);

        let token = trimmed.split_whitespace().next().unwrap_or_default();
        let keyword = token.to_lowercase();

        match keyword.as_str() {
            CLEAR_COMMAND => {
                debug!("clearing session buffer");
                buffer.clear();
                SubmitOutcome::Cleared
            }
            EXIT_COMMAND => {
                debug!("exit requested");
                buffer.push(BufferLine::output(FAREWELL));
                SubmitOutcome::Closing
            }
            _ => match self.registry.lookup(&keyword) {
                Some(lines) => {
                    debug!(command = %keyword, lines = lines.len(), "dispatched");
                    for line in lines {
                        buffer.push(BufferLine::output(line.clone()));
                    }
                    SubmitOutcome::Appended
                }
                None => {
                    debug!(command = %token, "unknown command");
                    buffer.push(BufferLine::error(format!(
                        "{token}: command not found. Type 'help' for available commands."
                    )));
                    SubmitOutcome::Appended
                }
            },
        }
    }
}
