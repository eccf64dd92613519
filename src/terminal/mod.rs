//! Portfolio Terminal Core
//!
//! The terminal is a registry-based dispatch system: the command set is
//! rendered once from the profile record, submissions run through the line
//! interpreter, and the session buffer accumulates the tagged lines the UI
//! draws. Nothing here touches the network or the filesystem; the only
//! external effect is the `Closing` outcome the host shell reacts to.

pub mod interpreter;
pub mod registry;
pub mod session;

// Re-exports for convenience
pub use interpreter::{LineInterpreter, SubmitOutcome, FAREWELL};
pub use registry::{CommandEntry, CommandRegistry, CLEAR_COMMAND, EXIT_COMMAND};
pub use session::{InputState, SessionBuffer};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::TerminalConfig;
use crate::error::Result;
use crate::models::{BufferLine, Profile};

/// One mounted terminal session.
///
/// Owns the interpreter, the session buffer, and the input/recall state.
/// Dropping the session discards the buffer; re-opening the terminal
/// starts from the welcome banner again.
#[derive(Debug)]
pub struct Terminal {
    id: String,
    started: DateTime<Utc>,
    interpreter: LineInterpreter,
    buffer: SessionBuffer,
    input: InputState,
}

impl Terminal {
    /// Create a terminal session over a profile.
    ///
    /// The registry is built here, once; the profile is not read again.
    pub fn new(profile: &Profile, config: &TerminalConfig) -> Self {
        let registry = CommandRegistry::build(profile);
        let prompt = format!("{}@portfolio:~$ ", profile.identity.username());
        let interpreter = LineInterpreter::new(registry, prompt);

        let mut buffer = SessionBuffer::new();
        let first_name = profile
            .identity
            .name
            .split_whitespace()
            .next()
            .unwrap_or("guest")
            .to_string();
        buffer.push(BufferLine::output(format!(
            "Welcome to {}'s Portfolio Terminal v{}",
            first_name,
            crate::VERSION
        )));
        buffer.push(BufferLine::output("Type 'help' to see available commands"));
        buffer.push(BufferLine::blank());

        let terminal = Self {
            id: Uuid::new_v4().to_string(),
            started: Utc::now(),
            interpreter,
            buffer,
            input: InputState::new(config.max_history),
        };
        info!(session = %terminal.id, "terminal session opened");
        terminal
    }

    /// Session identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// When this session was opened
    pub fn started(&self) -> DateTime<Utc> {
        self.started
    }

    /// The echoed prompt prefix
    pub fn prompt(&self) -> &str {
        self.interpreter.prompt()
    }

    /// The command registry backing this session
    pub fn registry(&self) -> &CommandRegistry {
        self.interpreter.registry()
    }

    /// Rendered lines, oldest first
    pub fn lines(&self) -> &[BufferLine] {
        self.buffer.lines()
    }

    /// Number of buffered lines
    pub fn line_count(&self) -> usize {
        self.buffer.len()
    }

    /// Input/recall state (read access)
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Input/recall state (for the text edit widget)
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Submit one raw line
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        self.interpreter.submit(raw, &mut self.buffer, &mut self.input)
    }

    /// Submit whatever is currently in the input field, clearing it
    pub fn submit_current(&mut self) -> SubmitOutcome {
        let raw = self.input.take_text();
        self.submit(&raw)
    }

    /// Recall the previous (older) history entry into the input field
    pub fn recall_previous(&mut self) {
        self.input.recall_previous();
    }

    /// Recall the next (newer) history entry into the input field
    pub fn recall_next(&mut self) {
        self.input.recall_next();
    }

    /// The session transcript as plain text
    pub fn transcript_text(&self) -> String {
        self.buffer.to_text()
    }

    /// The session transcript as JSON
    pub fn transcript_json(&self) -> Result<String> {
        self.buffer.to_json()
    }
}
