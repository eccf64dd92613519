//! UI components and rendering
//!
//! Widgets for the terminal overlay: the scrollback pane, the pinned
//! input prompt, and the theme-to-egui color mapping they share.

pub mod colors;
pub mod input;
pub mod output;

// Re-exports for convenience
pub use colors::LineStyles;
pub use input::InputPrompt;
pub use output::OutputPane;
