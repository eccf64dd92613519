//! FolioTerm - a portfolio terminal
//!
//! FolioTerm renders an interactive résumé as a GUI terminal emulator:
//! a minimal landing page hosts a terminal overlay whose commands
//! (`whoami`, `skills`, `experience`, `projects`, ...) are generated from
//! a profile record loaded once at startup.
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`config`] - Configuration loading, validation, color themes
//! - [`models`] - Data structures (Profile, BufferLine)
//! - [`terminal`] - Command registry, line interpreter, session state
//! - [`mod@error`] - Error types and Result aliases
//!
//! ### UI Components
//!
//! - [`ui`] - Rendering components (scrollback pane, input prompt, colors)
//!
//! ## Quick Start
//!
//! ```no_run
//! use folioterm::init;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load config and profile from the default locations
//! let startup = init()?;
//! println!("profile for {}", startup.profile.identity.name);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Everything runs single-threaded inside the `egui` update loop. A
//! submission is processed synchronously: echo, dispatch against the
//! prepared command registry, append to the session buffer, re-render.
//! The only deferred action is the `exit` command's close, modeled as a
//! cancellable deadline the host shell checks each frame.
//!
//! ## Safety and Reliability
//!
//! - **No Panics:** All fallible operations return `Result`
//! - **Graceful Degradation:** Falls back to defaults when config or
//!   profile loading fails
//! - **Read-Once Data:** The profile is loaded at startup and never
//!   re-read or mutated

#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;
pub mod models;
pub mod terminal;
pub mod ui;

// Re-exports for core functionality
pub use config::loader::ConfigLoader;
pub use config::theme::TerminalTheme;
pub use config::Config;
pub use error::{Error, Result};
pub use models::{BufferLine, LineKind, Profile};
pub use terminal::{SubmitOutcome, Terminal};

// Version information
/// The current version of FolioTerm from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Everything the GUI shell needs to start
#[derive(Debug)]
pub struct Startup {
    /// Validated application configuration
    pub config: Config,
    /// The profile record the command set is built from
    pub profile: Profile,
}

/// Initialize FolioTerm from the default locations.
///
/// Loads configuration and profile from their search paths, falling back
/// to built-in defaults when nothing is found. Only explicit paths fail
/// hard; see [`init_with_paths`].
pub fn init() -> Result<Startup> {
    init_with_paths(None, None)
}

/// Initialize FolioTerm with optional explicit config/profile paths.
///
/// An explicit path that cannot be loaded is an error; absent files on
/// the default search path only log a warning and fall back.
pub fn init_with_paths(
    config_path: Option<&std::path::Path>,
    profile_path: Option<&std::path::Path>,
) -> Result<Startup> {
    info!("Initializing {} v{}", NAME, VERSION);

    let config = match config_path {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => match ConfigLoader::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load configuration: {}. Using defaults", e);
                Config::default()
            }
        },
    };

    let profile = match profile_path {
        Some(path) => Profile::load_from_file(path)?,
        None => match Profile::load() {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Failed to load profile: {}. Using the bundled profile", e);
                Profile::builtin()?
            }
        },
    };

    info!(
        "Initialization complete (profile: {})",
        profile.identity.name
    );
    Ok(Startup { config, profile })
}

/// Map a startup error to a friendly, actionable message.
pub fn handle_startup_error(error: &Error) -> String {
    match error {
        Error::ConfigLoadFailed { path, reason } => {
            format!(
                "Configuration Error: Failed to load config from '{}': {}\n\nTry:\n- Check the file exists and is readable\n- Remove --config to use the default configuration",
                path.display(),
                reason
            )
        }
        Error::ConfigParseFailed { format, reason } => {
            format!(
                "Configuration Error: Failed to parse {} config: {}\n\nTry:\n- Check the configuration file syntax",
                format, reason
            )
        }
        Error::ConfigValidationFailed { field, reason } => {
            format!(
                "Configuration Error: Validation failed for '{}': {}",
                field, reason
            )
        }
        Error::ProfileLoadFailed { path, reason } => {
            format!(
                "Profile Error: Failed to load profile from '{}': {}\n\nTry:\n- Check the file exists and is valid TOML or JSON\n- Remove --profile to use the bundled profile",
                path.display(),
                reason
            )
        }
        Error::ProfileValidationFailed { reason } => {
            format!("Profile Error: {}", reason)
        }
        _ => format!("Startup Error: {}", error),
    }
}
