//! Hello formula - starter automation formula
//!
//! Reads the runner-provided inputs (free text, a boolean, a list selection
//! and a secret) and prints a fixed five-line colorized greeting.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod greeting;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use cli::{emit_all, CaptureSink, ColorWhen, LineSink, TerminalSink};
pub use greeting::{
    parse_flag, plain_text, render, ColorTag, DefaultsConfig, GreetingInputs, GreetingLine,
    PartialInputs,
};
