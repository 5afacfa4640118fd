//! CLI output formatting
//!
//! Provides line sinks for greeting output and terminal color control.

pub mod display;

pub use display::emit_all;
pub use display::CaptureSink;
pub use display::LineSink;
pub use display::TerminalSink;

/// When to style output with terminal colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorWhen {
    /// Let `colored` decide from `NO_COLOR`, `CLICOLOR` and tty detection
    #[default]
    Auto,
    /// Always emit escape codes
    Always,
    /// Never emit escape codes
    Never,
}

impl ColorWhen {
    /// Apply this choice to the process-wide `colored` control
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}
