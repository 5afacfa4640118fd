//! Greeting rendering and input resolution

pub mod config;
pub mod inputs;
pub mod render;

pub use config::DefaultsConfig;
pub use inputs::{parse_flag, GreetingInputs, PartialInputs};
pub use render::{plain_text, render, ColorTag, GreetingLine, LINE_COUNT};
